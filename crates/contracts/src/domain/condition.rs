use serde::{Deserialize, Serialize};

/// Payload of `GET /api/condition/allconditions`.
///
/// A failed lookup answers with `success: false` and may omit the
/// condition list entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsResponse {
    pub success: bool,
    /// Selectable condition names, kept in server order.
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Human-readable failure reason when `success` is false.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_payload() {
        let response: ConditionsResponse =
            serde_json::from_str(r#"{"success":true,"conditions":["A","B"]}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.conditions, vec!["A", "B"]);
        assert!(response.message.is_none());
    }

    #[test]
    fn deserializes_failure_without_conditions() {
        let response: ConditionsResponse =
            serde_json::from_str(r#"{"success":false,"message":"x"}"#).unwrap();
        assert!(!response.success);
        assert!(response.conditions.is_empty());
        assert_eq!(response.message.as_deref(), Some("x"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let response: ConditionsResponse = serde_json::from_str(
            r#"{"success":true,"conditions":[],"server_time":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(response.success);
    }
}
