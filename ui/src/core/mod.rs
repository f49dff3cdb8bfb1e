//! Platform-agnostic page logic: catalog, flattened gallery, lightbox and locale state.

pub mod catalog;
pub mod config;
pub mod flatten;
pub mod lightbox;
pub mod locale;
pub mod platform;
