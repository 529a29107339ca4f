//! Response envelope parsing for the BuiltByBit API.
//!
//! Every API response body is a JSON envelope carrying either the requested
//! data or a structured error:
//!
//! ```json
//! {"result": "success", "data": ...}
//! {"result": "error", "error": {"code": "...", "message": "..."}}
//! ```

use serde::Deserialize;

use crate::http::errors::ApiResponseError;

/// The decoded body of an API response.
#[derive(Debug, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub(crate) enum ResponseEnvelope {
    /// A successful response; `data` may be absent for mutations.
    Success {
        #[serde(default)]
        data: serde_json::Value,
    },
    /// An error response carrying a structured error body.
    Error { error: ErrorBody },
}

/// The structured error carried by an error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    /// Converts the envelope error into an [`ApiResponseError`] tagged with
    /// the HTTP status it arrived with.
    pub(crate) fn into_error(self, status: u16) -> ApiResponseError {
        ApiResponseError {
            status,
            code: self.code,
            message: self.message,
        }
    }
}

/// Builds a fallback error for responses whose body did not carry a
/// well-formed error envelope.
pub(crate) fn fallback_error(status: u16, body: &str) -> ApiResponseError {
    let message = if body.is_empty() {
        format!("The API responded with status {status} and an empty body.")
    } else {
        body.to_string()
    };
    ApiResponseError {
        status,
        code: "UnknownError".to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_with_data() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"result": "success", "data": [1, 2, 3]}"#).unwrap();
        match envelope {
            ResponseEnvelope::Success { data } => {
                assert_eq!(data, serde_json::json!([1, 2, 3]));
            }
            ResponseEnvelope::Error { .. } => panic!("expected success envelope"),
        }
    }

    #[test]
    fn test_success_envelope_without_data_defaults_to_null() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"result": "success"}"#).unwrap();
        match envelope {
            ResponseEnvelope::Success { data } => assert!(data.is_null()),
            ResponseEnvelope::Error { .. } => panic!("expected success envelope"),
        }
    }

    #[test]
    fn test_error_envelope_parses_code_and_message() {
        let envelope: ResponseEnvelope = serde_json::from_str(
            r#"{"result": "error", "error": {"code": "InvalidToken", "message": "Bad token."}}"#,
        )
        .unwrap();
        match envelope {
            ResponseEnvelope::Error { error } => {
                let api_error = error.into_error(401);
                assert_eq!(api_error.status, 401);
                assert_eq!(api_error.code, "InvalidToken");
                assert_eq!(api_error.message, "Bad token.");
            }
            ResponseEnvelope::Success { .. } => panic!("expected error envelope"),
        }
    }

    #[test]
    fn test_fallback_error_with_empty_body() {
        let error = fallback_error(502, "");
        assert_eq!(error.status, 502);
        assert_eq!(error.code, "UnknownError");
        assert!(error.message.contains("502"));
    }

    #[test]
    fn test_fallback_error_preserves_raw_body() {
        let error = fallback_error(500, "<html>Bad Gateway</html>");
        assert_eq!(error.message, "<html>Bad Gateway</html>");
    }
}
