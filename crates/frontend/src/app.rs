use crate::domain::a002_unit_type::UnitTypeTemplates;
use crate::domain::a003_division::ui::units::DivisionUnitList;
use crate::domain::a004_crisis::model::fetch_crisis;
use contracts::domain::a004_crisis::aggregate::Crisis;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let (crisis, set_crisis) = signal::<Option<Crisis>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_crisis().await {
            Ok(c) => {
                set_crisis.set(Some(c));
                set_error.set(None);
            }
            Err(e) => {
                log::error!("Crisis load failed: {}", e);
                set_error.set(Some(format!("Ошибка загрузки: {}", e)));
            }
        }
    });

    view! {
        <div class="crisis-app">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                crisis.get().map(|c| {
                    // Один общий набор прототипов на все дивизии
                    let templates = Arc::new(UnitTypeTemplates::from_unit_types(&c.unit_types));
                    if templates.is_empty() {
                        log::warn!("Crisis has no unit types, type labels will be empty");
                    } else {
                        log::debug!("{} unit type templates registered", templates.len());
                    }
                    c.divisions
                        .into_iter()
                        .map(|division| {
                            view! { <DivisionUnitList division=division templates=templates.clone() /> }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
