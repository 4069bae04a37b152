//! Shared pool of unit type label prototypes.
//!
//! Every unit row clones its type label from here, so the pool itself is
//! built once per crisis and never mutated afterwards.

use crate::domain::a001_unit::UnitError;
use contracts::domain::a002_unit_type::aggregate::UnitType;
use std::collections::HashMap;

/// Прототип подписи типа войск
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTypeTemplate {
    pub type_num: i32,
    pub name: String,
    pub class: String,
}

impl UnitTypeTemplate {
    pub fn new(type_num: i32, name: impl Into<String>) -> Self {
        Self {
            type_num,
            name: name.into(),
            class: format!("unit-type unit-type-{}", type_num),
        }
    }
}

impl From<&UnitType> for UnitTypeTemplate {
    fn from(t: &UnitType) -> Self {
        Self::new(t.id, t.name.clone())
    }
}

/// Independent copy of a type template, owned by one unit row.
///
/// An empty label renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeLabel {
    template: Option<UnitTypeTemplate>,
}

impl TypeLabel {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_none()
    }

    /// Text content of the label, "" when empty
    pub fn text(&self) -> &str {
        self.template.as_ref().map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn class(&self) -> &str {
        self.template.as_ref().map(|t| t.class.as_str()).unwrap_or("")
    }

    #[cfg(test)]
    pub fn type_num(&self) -> Option<i32> {
        self.template.as_ref().map(|t| t.type_num)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitTypeTemplates {
    by_num: HashMap<i32, UnitTypeTemplate>,
}

impl UnitTypeTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_unit_types(types: &[UnitType]) -> Self {
        let mut templates = Self::new();
        for t in types {
            templates.register(t.into());
        }
        templates
    }

    /// Регистрирует прототип; повторная регистрация того же номера заменяет старый
    pub fn register(&mut self, template: UnitTypeTemplate) {
        self.by_num.insert(template.type_num, template);
    }

    pub fn len(&self) -> usize {
        self.by_num.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_num.is_empty()
    }

    pub fn get(&self, type_num: i32) -> Option<&UnitTypeTemplate> {
        self.by_num.get(&type_num)
    }

    /// Templates ordered by type number, for pickers
    pub fn sorted(&self) -> Vec<&UnitTypeTemplate> {
        let mut templates: Vec<_> = self.by_num.values().collect();
        templates.sort_by_key(|t| t.type_num);
        templates
    }

    /// Strict lookup: an unregistered id is an error.
    pub fn lookup(&self, type_num: i32) -> Result<TypeLabel, UnitError> {
        self.by_num
            .get(&type_num)
            .map(|t| TypeLabel {
                template: Some(t.clone()),
            })
            .ok_or(UnitError::UnknownType(type_num))
    }

    /// Lenient lookup used when rendering: an unregistered id yields an
    /// empty label and a warning in the console.
    pub fn type_label(&self, type_num: i32) -> TypeLabel {
        match self.lookup(type_num) {
            Ok(label) => label,
            Err(e) => {
                log::warn!("{}, rendering empty type label", e);
                TypeLabel::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> UnitTypeTemplates {
        UnitTypeTemplates::from_unit_types(&[
            UnitType::new(1, "Cavalry"),
            UnitType::new(3, "Infantry"),
        ])
    }

    #[test]
    fn test_type_label_clones_registered_template() {
        let templates = templates();
        let label = templates.type_label(3);
        assert_eq!(label.text(), "Infantry");
        assert_eq!(label.class(), "unit-type unit-type-3");
        assert_eq!(label.type_num(), Some(3));
    }

    #[test]
    fn test_unknown_type_gives_empty_label() {
        let label = templates().type_label(42);
        assert!(label.is_empty());
        assert_eq!(label.text(), "");
        assert_eq!(label.class(), "");
    }

    #[test]
    fn test_strict_lookup_reports_unknown_type() {
        assert_eq!(templates().lookup(42), Err(UnitError::UnknownType(42)));
    }

    #[test]
    fn test_register_replaces_template() {
        let mut templates = templates();
        templates.register(UnitTypeTemplate::new(3, "Guards"));
        assert_eq!(templates.len(), 2);
        assert_eq!(templates.type_label(3).text(), "Guards");
    }

    #[test]
    fn test_sorted_by_type_number() {
        let nums: Vec<i32> = templates().sorted().iter().map(|t| t.type_num).collect();
        assert_eq!(nums, vec![1, 3]);
    }
}
