pub mod templates;
pub mod ui;

pub use templates::{TypeLabel, UnitTypeTemplate, UnitTypeTemplates};
