//! Navigation-state payload carried in the browser history slot.
//!
//! In-app navigations can hand the next page a search term and, when one is
//! already in hand, the results payload to render without refetching.

use leptos_router::location::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub search_results: Option<serde_json::Value>,
}

impl RouteState {
    pub fn for_search(search_term: String) -> Self {
        Self {
            search_term,
            search_results: None,
        }
    }

    /// Pack into the history-state slot for `NavigateOptions`.
    pub fn to_state(&self) -> State {
        State::new(serde_wasm_bindgen::to_value(self).ok())
    }

    /// Read back from the history-state slot. Absent or malformed state
    /// reads as `None`.
    pub fn from_state(state: &State) -> Option<Self> {
        let value = state.to_js_value();
        if value.is_null() || value.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field casing is part of the history-state contract shared with the
    // pages that read it back.
    #[test]
    fn serializes_camel_case() {
        let state = RouteState::for_search("kinase".to_string());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["searchTerm"], "kinase");
        assert!(json["searchResults"].is_null());
    }

    #[test]
    fn missing_fields_read_as_defaults() {
        let state: RouteState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, RouteState::default());
    }

    #[test]
    fn results_survive_a_round_trip() {
        let state = RouteState {
            search_term: "p53".to_string(),
            search_results: Some(serde_json::json!([{"protein":"P04637"}])),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: RouteState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
