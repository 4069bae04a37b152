use serde::{Deserialize, Serialize};

/// Тип войск, заведённый в кризисе (пехота, кавалерия, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitType {
    pub id: i32,
    pub name: String,
}

impl UnitType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
