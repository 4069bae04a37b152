use thiserror::Error;

/// Ошибки строки подразделения
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown unit type: {0}")]
    UnknownType(i32),

    #[error("Unit is no longer attached to a division")]
    Detached,

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}
