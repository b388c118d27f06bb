//! API calls for the landing page: condition list and protein search.

use contracts::domain::{ConditionsResponse, SearchResponse};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::api_url;

/// Failure modes of the cancellable conditions fetch. Abort is kept apart
/// from real errors so a teardown never shows up as a user-visible failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Aborted,
    Message(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Aborted => write!(f, "request aborted"),
            FetchError::Message(msg) => write!(f, "{}", msg),
        }
    }
}

fn is_abort(err: &gloo_net::Error) -> bool {
    matches!(err, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

fn classify(err: gloo_net::Error, context: &str) -> FetchError {
    if is_abort(&err) {
        FetchError::Aborted
    } else {
        FetchError::Message(format!("{}: {}", context, err))
    }
}

/// Fetch the full condition list. The request is tied to `signal` so the
/// caller can abort it when the page goes away before the server answers.
pub async fn fetch_conditions(signal: &AbortSignal) -> Result<Vec<String>, FetchError> {
    let response = Request::get(&api_url("/api/condition/allconditions"))
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(|e| classify(e, "Failed to send request"))?;

    let data: ConditionsResponse = response
        .json()
        .await
        .map_err(|e| classify(e, "Failed to parse response"))?;

    if data.success {
        Ok(data.conditions)
    } else {
        Err(FetchError::Message(data.message.unwrap_or_else(|| {
            "Failed to fetch conditions".to_string()
        })))
    }
}

/// Query path of the search endpoint for a given term.
pub fn search_path(term: &str) -> String {
    format!("/api/search?searchTerm={}", urlencoding::encode(term))
}

/// Run a protein search, returning the opaque results payload.
pub async fn search_proteins(term: &str) -> Result<serde_json::Value, String> {
    let response = Request::get(&api_url(&search_path(term)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let data: SearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if data.success {
        Ok(data.results.unwrap_or(serde_json::Value::Null))
    } else {
        Err(data
            .message
            .unwrap_or_else(|| "Failed to fetch data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_keeps_plain_terms_verbatim() {
        assert_eq!(search_path("kinase"), "/api/search?searchTerm=kinase");
    }

    #[test]
    fn search_path_encodes_reserved_characters() {
        assert_eq!(
            search_path("heat shock 70"),
            "/api/search?searchTerm=heat%20shock%2070"
        );
        assert_eq!(search_path("a&b=c"), "/api/search?searchTerm=a%26b%3Dc");
    }

    #[test]
    fn search_path_accepts_empty_terms() {
        assert_eq!(search_path(""), "/api/search?searchTerm=");
    }

    #[test]
    fn fetch_error_displays_its_message() {
        assert_eq!(FetchError::Message("boom".to_string()).to_string(), "boom");
        assert_eq!(FetchError::Aborted.to_string(), "request aborted");
    }
}
