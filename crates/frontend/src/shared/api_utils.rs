//! Helpers for talking to the DynaProt API server.

/// Port the API server listens on, alongside whatever serves the app itself.
const API_PORT: u16 = 3000;

/// Base URL for API requests, derived from the current window location.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://dynaprot.example:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/".
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/api/condition/allconditions");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
