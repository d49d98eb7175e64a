//! Error envelope returned by every JSON endpoint:
//! `{"error": {"code": "NOT_FOUND", "message": ..., "details": [...]}}`

use sme_derive::api_model;

/// Details about a specific error.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Field that caused the error (validation errors)
    pub field: Option<String>,
    pub message: String,
    /// Error code for programmatic handling
    pub code: Option<String>,
}

/// Error information container.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Error code (e.g. `NOT_FOUND`, `INTERNAL_ERROR`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

/// Standard error envelope.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: ErrorBody { code: code.into(), message: message.into(), details: Vec::new() } }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.error.details.push(detail);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_shape() {
        let body = ErrorResponse::new("NOT_FOUND", "No route for /missing").with_detail(ErrorDetail {
            field: Some("path".to_owned()),
            message: "unknown".to_owned(),
            code: None,
        });

        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert_eq!(value["error"]["message"], "No route for /missing");
        assert_eq!(value["error"]["details"][0]["field"], "path");
        assert!(value["error"]["details"][0]["code"].is_null());
    }

    #[test]
    fn error_envelope_rejects_unknown_fields() {
        let raw = json!({ "error": { "code": "X", "message": "m", "details": [] }, "extra": 1 });
        assert!(serde_json::from_value::<ErrorResponse>(raw).is_err());
    }
}
