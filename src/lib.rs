//! Onboarding flows for the Tajweed App desktop client.
//!
//! The library holds everything with observable behavior: the static option
//! catalogs, the preference store, and the selector flow shared by the
//! language and level screens. The `gui` module renders those flows with
//! egui; the binary in `main.rs` only wires up logging and the window.

pub mod catalog;
pub mod error;
pub mod gui;
pub mod onboarding;
pub mod prefs;
