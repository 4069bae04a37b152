use crate::domain::a001_unit::ui::item::{DivisionDetails, UnitView};
use crate::domain::a001_unit::UnitError;
use crate::domain::a002_unit_type::UnitTypeTemplates;
use contracts::domain::a001_unit::aggregate::UnitRecord;
use contracts::domain::a003_division::aggregate::{Division, UpdateDivisionRequest};
use leptos::prelude::*;
use std::sync::Arc;

/// Состав дивизии: владеет строками подразделений и удаляет их по запросу строки
pub struct DivisionUnits {
    division_id: i32,
    units: ArcRwSignal<Vec<UnitView>>,
    editing: ArcRwSignal<bool>,
    // последний загруженный с сервера состав
    saved: ArcRwSignal<Vec<UnitRecord>>,
}

impl DivisionUnits {
    pub fn new(division_id: i32) -> Arc<Self> {
        Arc::new(Self {
            division_id,
            units: ArcRwSignal::new(Vec::new()),
            editing: ArcRwSignal::new(false),
            saved: ArcRwSignal::new(Vec::new()),
        })
    }

    /// Builds the rows of `division`, already in edit mode when `start_editing`
    pub fn for_division(
        division: &Division,
        templates: &UnitTypeTemplates,
        start_editing: bool,
    ) -> Arc<Self> {
        let units = Self::new(division.id);
        units.editing.set(start_editing);
        units.load(&division.units, templates);
        units
    }

    pub fn division_id(&self) -> i32 {
        self.division_id
    }

    /// Replaces all rows with fresh views of `records` and remembers them
    /// as the state [`DivisionUnits::revert`] returns to
    pub fn load(self: &Arc<Self>, records: &[UnitRecord], templates: &UnitTypeTemplates) {
        let units = records
            .iter()
            .map(|record| self.build_unit(record, templates))
            .collect();
        self.saved.set(records.to_vec());
        self.units.set(units);
    }

    /// Cancel: leaves edit mode and rebuilds the rows from the last loaded
    /// records, dropping added rows, restoring removed ones and clearing
    /// invalid alerts.
    pub fn revert(self: &Arc<Self>, templates: &UnitTypeTemplates) {
        let records = self.saved.get_untracked();
        self.set_editing(false);
        self.load(&records, templates);
    }

    /// Takes the division returned by the server after a save
    pub fn apply_saved(self: &Arc<Self>, division: &Division, templates: &UnitTypeTemplates) {
        if division.id != self.division_id {
            log::warn!(
                "Division {}: server answered with division {}",
                self.division_id,
                division.id
            );
        }
        self.set_editing(false);
        self.load(&division.units, templates);
    }

    pub fn add_unit(self: &Arc<Self>, record: &UnitRecord, templates: &UnitTypeTemplates) -> UnitView {
        let unit = self.build_unit(record, templates);
        self.units.update(|units| units.push(unit.clone()));
        unit
    }

    fn build_unit(self: &Arc<Self>, record: &UnitRecord, templates: &UnitTypeTemplates) -> UnitView {
        let unit = UnitView::new(record, self, templates);
        if self.editing.get_untracked() {
            unit.enter_edit_mode();
        }
        unit
    }

    /// Current rows (tracked)
    pub fn units(&self) -> Vec<UnitView> {
        self.units.get()
    }

    pub fn len(&self) -> usize {
        self.units.with(|units| units.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_editing(&self) -> bool {
        self.editing.get()
    }

    /// Switches every row between edit and view mode
    pub fn set_editing(&self, editing: bool) {
        self.editing.set(editing);
        self.units.with_untracked(|units| {
            for unit in units {
                if editing {
                    unit.enter_edit_mode();
                } else {
                    unit.exit_edit_mode();
                }
            }
        });
    }

    /// Commits every row and returns the resulting records.
    ///
    /// All rows are committed so each invalid one shows its alert; the first
    /// error is returned.
    pub fn collect_records(&self) -> Result<Vec<UnitRecord>, UnitError> {
        let units = self.units.get_untracked();
        let mut records = Vec::with_capacity(units.len());
        let mut first_error = None;

        for unit in &units {
            match unit.commit_edit() {
                Ok(_) => records.push(unit.to_record()),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(records),
        }
    }

    pub fn update_request(
        &self,
        name: Option<String>,
        faction_id: Option<i32>,
    ) -> Result<UpdateDivisionRequest, UnitError> {
        Ok(UpdateDivisionRequest {
            id: self.division_id,
            units: self.collect_records()?,
            name,
            faction_id,
        })
    }
}

impl DivisionDetails for DivisionUnits {
    fn remove_unit(&self, unit: &UnitView) {
        let key = unit.key();
        self.units.update(|units| units.retain(|u| u.key() != key));
        log::debug!("Division {}: removed unit {:?}", self.division_id, key);
    }
}
