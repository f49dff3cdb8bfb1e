//! Locale store: the active UI language and its document-level side effects.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Arabic];

    /// Language tag, also the Fluent bundle folder name under `i18n/`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Locale::English => TextDirection::LeftToRight,
            Locale::Arabic => TextDirection::RightToLeft,
        }
    }

    /// Short badge shown on the toggle button ("EN" / "AR").
    pub fn badge(self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::Arabic => "AR",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::English => Locale::Arabic,
            Locale::Arabic => Locale::English,
        }
    }
}

/// Receiver for document-scoped locale effects. The page uses the host
/// document (`core::platform::HostDocument`); tests record calls instead.
pub trait DocumentSink {
    fn set_direction(&mut self, direction: TextDirection);
    fn set_language(&mut self, tag: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleState {
    pub active: Locale,
}

impl LocaleState {
    pub fn new(active: Locale) -> Self {
        Self { active }
    }

    pub fn toggle(&mut self) {
        self.active = self.active.other();
    }

    pub fn direction(&self) -> TextDirection {
        self.active.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::RightToLeft
    }

    /// Pushes direction and language tag for the active locale into `sink`.
    pub fn apply(&self, sink: &mut impl DocumentSink) {
        sink.set_direction(self.direction());
        sink.set_language(self.active.tag());
    }
}
