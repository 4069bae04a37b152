//! Division units UI Module
//!
//! - model.rs: API functions (update_division)
//! - view_model.rs: DivisionUnits, the collection behind the unit rows
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::DivisionUnitList;
pub use view_model::DivisionUnits;
