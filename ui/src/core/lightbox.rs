//! Lightbox controller: which image is open, and circular navigation over the
//! flattened sequence.
//!
//! Identity is url equality against the sequence. Navigation from a `selected`
//! url that is not in the sequence (stale or injected) is a no-op: the viewer
//! stays where it is and a warning is logged. The same goes for navigating
//! while closed or over an empty sequence.
//!
//! Keyboard and click handling are pure mappings from an input to an action,
//! so hosts only forward the event and honour the returned response.

use tracing::warn;

use super::catalog::Catalog;
use super::flatten::{flatten_catalog, FlattenedImageEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Closed, empty sequence, or `selected` not found.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl LightboxKey {
    pub const ALL: [LightboxKey; 3] = [Self::ArrowLeft, Self::ArrowRight, Self::Escape];

    /// DOM `KeyboardEvent.key` value.
    pub fn name(self) -> &'static str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Escape => "Escape",
        }
    }

    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Whether the browser's own action (scrolling) is suppressed for this key
    /// while the lightbox is open. Hosts that must decide synchronously, before
    /// the controller has seen the key, rely on this.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::ArrowLeft | Self::ArrowRight)
    }
}

/// Element of the open overlay that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Backdrop,
    Image,
    CloseButton,
    Nav(Direction),
}

/// What the host should do with a click after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickResponse {
    pub navigation: Navigation,
    /// The click must not bubble to the backdrop.
    pub stop_propagation: bool,
}

/// What the host should do with a key event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResponse {
    pub handled: bool,
    pub prevent_default: bool,
}

impl KeyResponse {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    sequence: Vec<FlattenedImageEntry>,
    selected: Option<String>,
}

impl Lightbox {
    pub fn new(sequence: Vec<FlattenedImageEntry>) -> Self {
        Self {
            sequence,
            selected: None,
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(flatten_catalog(catalog))
    }

    pub fn sequence(&self) -> &[FlattenedImageEntry] {
        &self.sequence
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.sequence.iter().any(|entry| entry.url == url) {
            warn!(%url, "lightbox opened on an image outside the gallery sequence");
        }
        self.selected = Some(url);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Index of `selected` in the sequence, if open and known.
    pub fn position(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.sequence.iter().position(|entry| entry.url == selected)
    }

    pub fn current_entry(&self) -> Option<&FlattenedImageEntry> {
        self.position().map(|index| &self.sequence[index])
    }

    pub fn next(&mut self) -> Navigation {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> Navigation {
        self.step(Direction::Previous)
    }

    pub fn step(&mut self, direction: Direction) -> Navigation {
        let Some(selected) = self.selected.as_deref() else {
            return Navigation::Unchanged;
        };
        let Some(from) = self.position() else {
            warn!(url = %selected, "lightbox navigation ignored: image not in sequence");
            return Navigation::Unchanged;
        };

        let len = self.sequence.len();
        let to = match direction {
            Direction::Next => (from + 1) % len,
            Direction::Previous => (from + len - 1) % len,
        };
        self.selected = Some(self.sequence[to].url.clone());
        Navigation::Moved { from, to }
    }

    /// Applies a key press. Keys are ignored entirely while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> KeyResponse {
        if !self.is_open() {
            return KeyResponse::IGNORED;
        }
        match key {
            LightboxKey::ArrowLeft => {
                self.previous();
            }
            LightboxKey::ArrowRight => {
                self.next();
            }
            LightboxKey::Escape => self.close(),
        }
        KeyResponse {
            handled: true,
            prevent_default: key.suppresses_default(),
        }
    }

    /// `handle_key` for a raw DOM `KeyboardEvent.key` value.
    pub fn handle_key_name(&mut self, key_name: &str) -> KeyResponse {
        match LightboxKey::from_key_name(key_name) {
            Some(key) => self.handle_key(key),
            None => KeyResponse::IGNORED,
        }
    }

    /// Applies a click on one element of the overlay.
    ///
    /// Only the buttons keep their click to themselves. A click on the image
    /// bubbles, so the backdrop handler closes the viewer afterwards.
    pub fn handle_click(&mut self, target: OverlayTarget) -> ClickResponse {
        match target {
            OverlayTarget::Backdrop => {
                self.close();
                ClickResponse {
                    navigation: Navigation::Unchanged,
                    stop_propagation: false,
                }
            }
            OverlayTarget::Image => ClickResponse {
                navigation: Navigation::Unchanged,
                stop_propagation: false,
            },
            OverlayTarget::CloseButton => {
                self.close();
                ClickResponse {
                    navigation: Navigation::Unchanged,
                    stop_propagation: true,
                }
            }
            OverlayTarget::Nav(direction) => ClickResponse {
                navigation: self.step(direction),
                stop_propagation: true,
            },
        }
    }
}
