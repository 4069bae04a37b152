//! Unit list item UI module
//!
//! MVVM split used across the frontend:
//! - view_model.rs: UnitView with edit/view mode state and the remove delegation
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UnitListItem;
pub use view_model::{DivisionDetails, UnitKey, UnitMode, UnitRegion, UnitView};
