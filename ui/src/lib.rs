//! Shared UI crate for the Bright Buds logo showcase. Page logic, components
//! and string tables live here; `web` and `desktop` only launch it.

pub mod components;
pub mod core;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod views;

#[cfg(test)]
mod tests;
