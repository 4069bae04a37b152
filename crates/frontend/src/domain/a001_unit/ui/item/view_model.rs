use crate::domain::a001_unit::UnitError;
use crate::domain::a002_unit_type::{TypeLabel, UnitTypeTemplates};
use contracts::domain::a001_unit::aggregate::UnitRecord;
use leptos::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

static NEXT_UNIT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of a unit row, unique for the lifetime of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitKey(u64);

impl UnitKey {
    fn next() -> Self {
        Self(NEXT_UNIT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMode {
    View,
    Edit,
}

/// Именованные области строки подразделения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRegion {
    Value,
    Type,
    EditField,
    RemoveButton,
    InvalidAlert,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionVisibility {
    pub value: bool,
    pub type_label: bool,
    pub edit_field: bool,
    pub remove_button: bool,
    pub invalid_alert: bool,
}

/// Collection that owns unit rows and can drop one of them.
///
/// Called synchronously from the remove button's click handler.
pub trait DivisionDetails: Send + Sync {
    fn remove_unit(&self, unit: &UnitView);
}

/// ViewModel of one unit row
///
/// Cloning shares the reactive state: every clone is the same row.
#[derive(Clone)]
pub struct UnitView {
    key: UnitKey,
    details: Weak<dyn DivisionDetails>,
    type_name: String,
    type_num: i32,
    type_label: TypeLabel,
    amount: ArcRwSignal<f64>,
    mode: ArcRwSignal<UnitMode>,
    edit_value: ArcRwSignal<String>,
    invalid: ArcRwSignal<bool>,
}

impl UnitView {
    pub fn new<D>(record: &UnitRecord, details: &Arc<D>, templates: &UnitTypeTemplates) -> Self
    where
        D: DivisionDetails + 'static,
    {
        let details: Weak<dyn DivisionDetails> = Arc::<D>::downgrade(details);
        Self {
            key: UnitKey::next(),
            details,
            type_name: record.type_name.clone(),
            type_num: record.type_num,
            type_label: Self::type_label(templates, record.type_num),
            amount: ArcRwSignal::new(record.amount),
            mode: ArcRwSignal::new(UnitMode::View),
            edit_value: ArcRwSignal::new(String::new()),
            invalid: ArcRwSignal::new(false),
        }
    }

    /// Same as [`UnitView::new`]; a row without its division cannot be removed,
    /// so the collaborator is required here too.
    pub fn from_record<D>(record: &UnitRecord, details: &Arc<D>, templates: &UnitTypeTemplates) -> Self
    where
        D: DivisionDetails + 'static,
    {
        Self::new(record, details, templates)
    }

    /// Clone of the label registered for `type_num`, empty if none is
    pub fn type_label(templates: &UnitTypeTemplates, type_num: i32) -> TypeLabel {
        templates.type_label(type_num)
    }

    pub fn try_type_label(templates: &UnitTypeTemplates, type_num: i32) -> Result<TypeLabel, UnitError> {
        templates.lookup(type_num)
    }

    pub fn key(&self) -> UnitKey {
        self.key
    }

    pub fn label(&self) -> &TypeLabel {
        &self.type_label
    }

    pub fn amount(&self) -> f64 {
        self.amount.get()
    }

    /// Amount as displayed in the value region, without any formatting
    pub fn value_text(&self) -> String {
        self.amount().to_string()
    }

    pub fn mode(&self) -> UnitMode {
        self.mode.get()
    }

    pub fn is_editing(&self) -> bool {
        self.mode() == UnitMode::Edit
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid.get()
    }

    pub fn edit_value(&self) -> String {
        self.edit_value.get()
    }

    pub fn set_edit_value(&self, text: String) {
        self.edit_value.set(text);
    }

    pub fn is_visible(&self, region: UnitRegion) -> bool {
        match region {
            UnitRegion::Value => !self.is_editing(),
            UnitRegion::Type => true,
            UnitRegion::EditField | UnitRegion::RemoveButton => self.is_editing(),
            UnitRegion::InvalidAlert => self.is_invalid(),
        }
    }

    #[cfg(test)]
    pub fn visibility(&self) -> RegionVisibility {
        RegionVisibility {
            value: self.is_visible(UnitRegion::Value),
            type_label: self.is_visible(UnitRegion::Type),
            edit_field: self.is_visible(UnitRegion::EditField),
            remove_button: self.is_visible(UnitRegion::RemoveButton),
            invalid_alert: self.is_visible(UnitRegion::InvalidAlert),
        }
    }

    /// Shows the edit field pre-filled with the current amount and the
    /// remove button, hides the value.
    pub fn enter_edit_mode(&self) {
        self.edit_value.set(self.amount.get_untracked().to_string());
        self.mode.set(UnitMode::Edit);
    }

    pub fn exit_edit_mode(&self) {
        self.mode.set(UnitMode::View);
    }

    /// Parses the edit field into the amount.
    ///
    /// Outside edit mode the current amount is returned unchanged.
    pub fn commit_edit(&self) -> Result<f64, UnitError> {
        if self.mode.get_untracked() != UnitMode::Edit {
            return Ok(self.amount.get_untracked());
        }

        let text = self.edit_value.get_untracked();
        match parse_amount(&text) {
            Some(amount) => {
                self.amount.set(amount);
                self.invalid.set(false);
                Ok(amount)
            }
            None => {
                self.invalid.set(true);
                Err(UnitError::InvalidAmount(text))
            }
        }
    }

    pub fn to_record(&self) -> UnitRecord {
        UnitRecord {
            amount: self.amount.get_untracked(),
            type_name: self.type_name.clone(),
            type_num: self.type_num,
        }
    }

    /// Handler of the remove button: asks the owning division to drop this row.
    pub fn click_remove(&self) -> Result<(), UnitError> {
        let details = self.details.upgrade().ok_or(UnitError::Detached)?;
        details.remove_unit(self);
        Ok(())
    }
}

impl fmt::Debug for UnitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitView")
            .field("key", &self.key)
            .field("type_num", &self.type_num)
            .field("amount", &self.amount.get_untracked())
            .field("mode", &self.mode.get_untracked())
            .finish()
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    let amount = text.trim().parse::<f64>().ok()?;
    // "-0" тоже отрицательное число
    (amount.is_finite() && !amount.is_sign_negative()).then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_unit_type::aggregate::UnitType;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDetails {
        removed: Mutex<Vec<UnitKey>>,
    }

    impl DivisionDetails for RecordingDetails {
        fn remove_unit(&self, unit: &UnitView) {
            self.removed.lock().unwrap().push(unit.key());
        }
    }

    fn templates() -> UnitTypeTemplates {
        UnitTypeTemplates::from_unit_types(&[UnitType::new(3, "Infantry")])
    }

    fn infantry() -> UnitRecord {
        UnitRecord::new(12.0, "Infantry", 3)
    }

    #[test]
    fn test_construct_shows_amount_and_type_label() {
        let details = Arc::new(RecordingDetails::default());
        let templates = templates();
        let unit = UnitView::new(&infantry(), &details, &templates);

        assert_eq!(unit.value_text(), "12");
        assert_eq!(unit.label(), &templates.type_label(3));
        assert_eq!(unit.label().text(), "Infantry");
        assert_eq!(unit.mode(), UnitMode::View);
        assert_eq!(
            unit.visibility(),
            RegionVisibility {
                value: true,
                type_label: true,
                edit_field: false,
                remove_button: false,
                invalid_alert: false,
            }
        );
    }

    #[test]
    fn test_fractional_amount_is_displayed_as_is() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::from_record(&UnitRecord::new(2.5, "Infantry", 3), &details, &templates());
        assert_eq!(unit.value_text(), "2.5");
    }

    #[test]
    fn test_unknown_type_renders_empty_label() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&UnitRecord::new(1.0, "Ghosts", 99), &details, &templates());
        assert!(unit.label().is_empty());
        assert!(UnitView::type_label(&templates(), 99).is_empty());
        assert_eq!(
            UnitView::try_type_label(&templates(), 99),
            Err(UnitError::UnknownType(99))
        );
    }

    #[test]
    fn test_edit_mode_round_trip_restores_visibility() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        let before = unit.visibility();

        unit.enter_edit_mode();
        assert!(unit.is_visible(UnitRegion::EditField));
        assert!(unit.is_visible(UnitRegion::RemoveButton));
        assert!(!unit.is_visible(UnitRegion::Value));
        assert_eq!(unit.edit_value(), "12");

        unit.exit_edit_mode();
        assert_eq!(unit.visibility(), before);
    }

    #[test]
    fn test_click_remove_calls_division_once_with_this_unit() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        let other = UnitView::new(&infantry(), &details, &templates());

        unit.click_remove().unwrap();

        let removed = details.removed.lock().unwrap();
        assert_eq!(removed.as_slice(), &[unit.key()]);
        assert_ne!(unit.key(), other.key());
    }

    #[test]
    fn test_click_remove_after_division_dropped() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        drop(details);

        assert_eq!(unit.click_remove(), Err(UnitError::Detached));
    }

    #[test]
    fn test_commit_edit_updates_amount() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        unit.enter_edit_mode();
        unit.set_edit_value(" 40 ".to_string());

        assert_eq!(unit.commit_edit(), Ok(40.0));
        assert_eq!(unit.value_text(), "40");
        assert_eq!(unit.to_record(), UnitRecord::new(40.0, "Infantry", 3));
        assert!(!unit.is_invalid());
    }

    #[test]
    fn test_commit_edit_rejects_bad_amount() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        unit.enter_edit_mode();

        for bad in ["abc", "-3", "-0", "inf", "NaN", ""] {
            unit.set_edit_value(bad.to_string());
            assert_eq!(
                unit.commit_edit(),
                Err(UnitError::InvalidAmount(bad.to_string()))
            );
            assert!(unit.is_visible(UnitRegion::InvalidAlert));
        }
        assert_eq!(unit.amount(), 12.0);

        unit.set_edit_value("7".to_string());
        assert_eq!(unit.commit_edit(), Ok(7.0));
        assert!(!unit.is_visible(UnitRegion::InvalidAlert));
    }

    #[test]
    fn test_commit_outside_edit_mode_keeps_amount() {
        let details = Arc::new(RecordingDetails::default());
        let unit = UnitView::new(&infantry(), &details, &templates());
        unit.set_edit_value("abc".to_string());
        assert_eq!(unit.commit_edit(), Ok(12.0));
        assert!(!unit.is_invalid());
    }
}
