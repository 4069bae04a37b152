pub mod a001_unit;
pub mod a002_unit_type;
pub mod a003_division;
pub mod a004_crisis;
