use super::templates::TypeLabel;
use leptos::prelude::*;

/// Renders a cloned type label; an empty label renders nothing
#[component]
pub fn TypeLabelView(label: TypeLabel) -> impl IntoView {
    if label.is_empty() {
        return ().into_any();
    }

    view! {
        <span class=label.class().to_string()>{label.text().to_string()}</span>
    }
    .into_any()
}
