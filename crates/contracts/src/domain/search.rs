use serde::{Deserialize, Serialize};

/// Payload of `GET /api/search?searchTerm=...`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Opaque results payload, rendered as-is by the results view.
    #[serde(default)]
    pub results: Option<serde_json::Value>,
    /// Human-readable failure reason when `success` is false.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn results_payload_is_passed_through_untouched() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"success":true,"results":[{"protein":"P04637","score":0.93}]}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(
            response.results,
            Some(json!([{"protein":"P04637","score":0.93}]))
        );
        assert!(response.message.is_none());
    }

    #[test]
    fn deserializes_failure_without_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"success":false,"message":"no index"}"#).unwrap();
        assert!(!response.success);
        assert!(response.results.is_none());
        assert_eq!(response.message.as_deref(), Some("no index"));
    }
}
