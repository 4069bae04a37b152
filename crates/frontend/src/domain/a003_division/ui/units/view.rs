use super::model;
use super::view_model::DivisionUnits;
use crate::domain::a001_unit::ui::item::{UnitListItem, UnitView};
use crate::domain::a001_unit::UnitError;
use crate::domain::a002_unit_type::UnitTypeTemplates;
use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::domain::a001_unit::aggregate::UnitRecord;
use contracts::domain::a003_division::aggregate::Division;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::sync::Arc;

fn shown_when_editing(
    units: &Arc<DivisionUnits>,
    editing: bool,
) -> impl Fn() -> &'static str + Send + Sync + 'static {
    let units = units.clone();
    move || if units.is_editing() == editing { "" } else { "none" }
}

#[component]
pub fn DivisionUnitList(division: Division, templates: Arc<UnitTypeTemplates>) -> impl IntoView {
    let units = DivisionUnits::for_division(&division, &templates, config().ui.start_in_edit_mode);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (new_type, set_new_type) = signal::<Option<i32>>(None);

    let handle_edit = {
        let units = units.clone();
        move |_: MouseEvent| {
            set_error.set(None);
            units.set_editing(true);
        }
    };

    let handle_cancel = {
        let units = units.clone();
        let templates = templates.clone();
        move |_: MouseEvent| {
            units.revert(&templates);
            set_error.set(None);
        }
    };

    let handle_add = {
        let units = units.clone();
        let templates = templates.clone();
        move |_: MouseEvent| {
            let Some(type_num) = new_type.get_untracked() else {
                set_error.set(Some("Выберите тип войск".to_string()));
                return;
            };
            match templates.get(type_num) {
                Some(t) => {
                    let record = UnitRecord::new(0.0, t.name.clone(), t.type_num);
                    units.add_unit(&record, &templates);
                    set_error.set(None);
                }
                None => set_error.set(Some(UnitError::UnknownType(type_num).to_string())),
            }
        }
    };

    let handle_save = {
        let units = units.clone();
        let templates = templates.clone();
        move |_: MouseEvent| {
            let request = match units.update_request(None, None) {
                Ok(request) => request,
                Err(e) => {
                    set_error.set(Some(format!("Проверьте численность: {}", e)));
                    return;
                }
            };

            set_saving.set(true);
            let units = units.clone();
            let templates = templates.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match model::update_division(&request).await {
                    Ok(updated) => {
                        units.apply_saved(&updated, &templates);
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Division {} save failed: {}", units.division_id(), e);
                        set_error.set(Some(format!("Ошибка сохранения: {}", e)));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let type_options = templates
        .sorted()
        .into_iter()
        .map(|t| {
            view! { <option value=t.type_num.to_string()>{t.name.clone()}</option> }
        })
        .collect_view();

    view! {
        <div class="details-container division-units">
            <div class="details-header">
                {icon("division")}
                <h3>{division.name.clone()}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <ul class="unit-list">
                <For
                    each={
                        let units = units.clone();
                        move || units.units()
                    }
                    key=|unit: &UnitView| unit.key()
                    children=move |unit: UnitView| view! { <UnitListItem unit=unit /> }
                />
                {
                    let units = units.clone();
                    move || units.is_empty().then(|| view! { <li class="empty">{"Нет подразделений"}</li> })
                }
            </ul>

            <div class="add-unit" style:display=shown_when_editing(&units, true)>
                <select on:change=move |ev| set_new_type.set(event_target_value(&ev).parse::<i32>().ok())>
                    <option value="">{"Тип войск…"}</option>
                    {type_options}
                </select>
                <button class="btn btn-secondary" on:click=handle_add>
                    {"Добавить"}
                </button>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    style:display=shown_when_editing(&units, false)
                    on:click=handle_edit
                >
                    {icon("edit")}
                    {"Изменить"}
                </button>
                <button
                    class="btn btn-primary"
                    style:display=shown_when_editing(&units, true)
                    disabled=move || saving.get()
                    on:click=handle_save
                >
                    {icon("save")}
                    {"Сохранить"}
                </button>
                <button
                    class="btn btn-secondary"
                    style:display=shown_when_editing(&units, true)
                    disabled=move || saving.get()
                    on:click=handle_cancel
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
