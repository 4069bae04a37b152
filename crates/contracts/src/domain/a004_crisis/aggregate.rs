use serde::{Deserialize, Serialize};

use crate::domain::a002_unit_type::aggregate::UnitType;
use crate::domain::a003_division::aggregate::Division;

/// Ответ `ajax/crisis/`
///
/// Сервер также присылает карту и фракции, эти поля здесь не читаются.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Crisis {
    #[serde(default)]
    pub divisions: Vec<Division>,
    #[serde(default)]
    pub unit_types: Vec<UnitType>,
}
