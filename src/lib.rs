//! Selectable dropdown/combobox widget for Dioxus front-ends.

pub mod components;
mod utils;

pub use components::*;
