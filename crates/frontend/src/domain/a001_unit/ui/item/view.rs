use super::view_model::{UnitRegion, UnitView};
use crate::domain::a002_unit_type::ui::TypeLabelView;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// `display` value for a region, mirrors show()/hide() on the cloned row
fn display_of(unit: &UnitView, region: UnitRegion) -> impl Fn() -> &'static str + Send + Sync + 'static {
    let unit = unit.clone();
    move || if unit.is_visible(region) { "" } else { "none" }
}

#[component]
pub fn UnitListItem(unit: UnitView) -> impl IntoView {
    let label = unit.label().clone();

    view! {
        <li class="unit">
            <span class="value" style:display=display_of(&unit, UnitRegion::Value)>
                {
                    let unit = unit.clone();
                    move || unit.value_text()
                }
            </span>
            <span class="type">
                <TypeLabelView label=label />
            </span>
            <input
                type="text"
                class="editField"
                style:display=display_of(&unit, UnitRegion::EditField)
                prop:value={
                    let unit = unit.clone();
                    move || unit.edit_value()
                }
                on:input={
                    let unit = unit.clone();
                    move |ev| unit.set_edit_value(event_target_value(&ev))
                }
            />
            <button
                class="removeUnitButton btn btn-secondary"
                title="Удалить"
                style:display=display_of(&unit, UnitRegion::RemoveButton)
                on:click={
                    let unit = unit.clone();
                    move |_| {
                        if let Err(e) = unit.click_remove() {
                            log::warn!("Remove unit {:?}: {}", unit.key(), e);
                        }
                    }
                }
            >
                {icon("delete")}
            </button>
            <span class="invalidAlert error" style:display=display_of(&unit, UnitRegion::InvalidAlert)>
                {"Введите неотрицательное число"}
            </span>
        </li>
    }
}
