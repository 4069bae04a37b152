use crate::shared::api_utils::ajax_url;
use contracts::domain::a003_division::aggregate::{Division, UpdateDivisionRequest};
use gloo_net::http::Request;

/// Сохранить состав дивизии, сервер возвращает обновлённую дивизию
pub async fn update_division(request: &UpdateDivisionRequest) -> Result<Division, String> {
    let response = Request::post(&ajax_url("updateDivision"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Division>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
