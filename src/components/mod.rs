//! The components module contains all shared components for the widget.

mod dropdown;
mod icons;

pub use dropdown::*;
pub use icons::*;
