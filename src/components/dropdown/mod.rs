//! Selectable dropdown with single/multiple modes, search and a detached list mode.

mod classes;
mod dropdown_view;
mod listeners;
mod option;
mod positioning;
mod rows;
mod search;
mod selection;
mod state;

pub use classes::*;
pub use dropdown_view::*;
pub use listeners::*;
pub use option::*;
pub use positioning::*;
pub use rows::*;
pub use search::*;
pub use selection::*;
pub use state::*;
