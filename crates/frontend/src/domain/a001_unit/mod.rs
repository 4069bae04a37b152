pub mod error;
pub mod ui;

pub use error::UnitError;
