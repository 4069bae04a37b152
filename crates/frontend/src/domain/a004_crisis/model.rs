use crate::shared::api_utils::ajax_url;
use contracts::domain::a004_crisis::aggregate::Crisis;
use gloo_net::http::Request;

/// Загрузить кризис: дивизии и типы войск
pub async fn fetch_crisis() -> Result<Crisis, String> {
    let response = Request::get(&ajax_url("crisis"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let crisis: Crisis = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    log::debug!(
        "Crisis loaded: {} divisions, {} unit types",
        crisis.divisions.len(),
        crisis.unit_types.len()
    );
    Ok(crisis)
}
