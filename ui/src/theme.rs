//! Shared stylesheet, embedded so both launchers can inline it without a
//! separate asset pipeline.

pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
