use serde::{Deserialize, Serialize};

use crate::domain::a001_unit::aggregate::UnitRecord;

/// Дивизия с составом подразделений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Division {
    pub id: i32,
    pub name: String,
    pub faction_id: i32,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
}

/// Тело запроса `ajax/updateDivision/`
///
/// `Name` и `FactionId` не отправляются, если не меняются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDivisionRequest {
    pub id: i32,
    pub units: Vec<UnitRecord>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub faction_id: Option<i32>,
}
