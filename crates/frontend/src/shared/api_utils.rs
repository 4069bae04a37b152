//! API utilities for frontend-backend communication
//!
//! The page and the ajax endpoints are served by the same server, so every
//! URL is built on the page's own origin.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "https://example.com"
/// - Empty string if window is not available; the request then goes to a
///   relative path, which the browser resolves against the page
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Path of an ajax endpoint, e.g. `ajax_path("crisis")` -> "/ajax/crisis/"
pub fn ajax_path(endpoint: &str) -> String {
    join_ajax_path(&config().api.ajax_prefix, endpoint)
}

fn join_ajax_path(prefix: &str, endpoint: &str) -> String {
    format!(
        "{}/{}/",
        prefix.trim_end_matches('/'),
        endpoint.trim_matches('/')
    )
}

/// Build a full URL of an ajax endpoint
///
/// # Example
/// ```rust,ignore
/// let url = ajax_url("updateDivision");
/// ```
pub fn ajax_url(endpoint: &str) -> String {
    same_origin_url(&api_base(), &ajax_path(endpoint))
}

fn same_origin_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}
