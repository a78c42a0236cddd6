//! Helpers for inspecting raw API responses
//!
//! Responses come back verbatim as [`serde_json::Value`]; the client never
//! rejects a payload because of an `error` field. These helpers let callers
//! check for one without re-walking the JSON themselves.

use serde_json::Value;

/// Application-level error message carried in an otherwise successful response
pub fn error_message(response: &Value) -> Option<&str> {
    response.get("error").and_then(Value::as_str)
}

/// Whether the response signals an application-level failure
pub fn is_error(response: &Value) -> bool {
    error_message(response).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_response() {
        let response = json!({"error": "Invalid API key/secret pair."});
        assert!(is_error(&response));
        assert_eq!(error_message(&response), Some("Invalid API key/secret pair."));
    }

    #[test]
    fn test_success_object() {
        let response = json!({"BTC": "0.59098578", "LTC": "3.31117268"});
        assert!(!is_error(&response));
        assert_eq!(error_message(&response), None);
    }

    #[test]
    fn test_success_array() {
        let response = json!([{"date": "2014-02-19 03:44:59", "type": "buy"}]);
        assert!(!is_error(&response));
    }
}
