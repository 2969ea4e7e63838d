//! Shapes shared by every remote response.

use serde::{Deserialize, Serialize};

/// One error reported by the remote service inside an otherwise successful call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OperationError {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Outcome block attached to every remote response. Never interpreted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OperationResult {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub errors: Vec<OperationError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_null_errors_read_as_success() {
        let result: OperationResult =
            serde_json::from_str(r#"{"Errors": null, "RequestId": "7c1f"}"#).unwrap();
        assert!(result.is_success());
        assert_eq!(result.request_id.as_deref(), Some("7c1f"));
    }

    #[test]
    fn test_null_error_fields_read_as_empty() {
        let result: OperationResult = serde_json::from_str(
            r#"{"Errors": [{"Code": "300002", "Description": null, "Context": null}]}"#,
        )
        .unwrap();
        assert!(!result.is_success());
        assert_eq!(result.errors[0].code, "300002");
        assert_eq!(result.errors[0].description, "");
        assert_eq!(result.errors[0].context, None);
    }
}
