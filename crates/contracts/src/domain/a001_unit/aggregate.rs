use serde::{Deserialize, Serialize};

// ============================================================================
// Unit record
// ============================================================================

/// Численность одного типа войск внутри дивизии
///
/// JSON: `{ "Amount": 12, "TypeName": "Infantry", "TypeNum": 3 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitRecord {
    pub amount: f64,
    pub type_name: String,
    pub type_num: i32,
}

impl UnitRecord {
    pub fn new(amount: f64, type_name: impl Into<String>, type_num: i32) -> Self {
        Self {
            amount,
            type_name: type_name.into(),
            type_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_record_uses_server_keys() {
        let json = r#"{"Amount":12,"TypeName":"Infantry","TypeNum":3}"#;
        let record: UnitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, UnitRecord::new(12.0, "Infantry", 3));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["TypeNum"], 3);
        assert_eq!(value["TypeName"], "Infantry");
        assert!(value.get("type_num").is_none());
    }
}
