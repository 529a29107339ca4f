//! HTTP-specific error types for the BuiltByBit API SDK.
//!
//! This module contains error types for transport operations: API error
//! responses, retry exhaustion, network failures, and body decoding failures.
//!
//! # Error Handling
//!
//! - [`ApiResponseError`]: An error envelope or non-2xx response from the API
//! - [`MaxRetriesExceededError`]: When rate-limit retry attempts are exhausted
//! - [`HttpError`]: Unified error type encompassing all transport errors
//!
//! # Example
//!
//! ```rust,ignore
//! use builtbybit_api::HttpError;
//!
//! match client.threads().fetch(123).await {
//!     Ok(thread) => println!("{}", thread.title),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {} ({}): {}", e.code, e.status, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => {
//!         println!("Rate limited after {} tries", e.tries);
//!     }
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Bad response body: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API responds with an error envelope or a
/// non-successful HTTP status.
///
/// The `code` field carries the machine-readable error code from the API's
/// error envelope (e.g. `InvalidToken`), or `"UnknownError"` when the body
/// did not carry one.
///
/// # Example
///
/// ```rust
/// use builtbybit_api::ApiResponseError;
///
/// let error = ApiResponseError {
///     status: 401,
///     code: "InvalidToken".to_string(),
///     message: "The supplied API token was invalid.".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "InvalidToken: The supplied API token was invalid.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The machine-readable error code from the response envelope.
    pub code: String,
    /// The human-readable error message from the response envelope.
    pub message: String,
}

/// Error returned when rate-limit retry attempts have been exhausted.
///
/// This error is raised when a request continues to be rejected with 429 or
/// 500 responses after all configured attempts have been made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Exceeded maximum retry count of {tries}. Last error: {last_error}")]
pub struct MaxRetriesExceededError {
    /// The HTTP status code of the last response.
    pub status: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The error carried by the last response.
    pub last_error: ApiResponseError,
}

/// Unified error type for all transport-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API rejected the request (error envelope or non-2xx status).
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Rate-limit retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response_error() -> ApiResponseError {
        ApiResponseError {
            status: 429,
            code: "TooManyRequests".to_string(),
            message: "You are being rate limited.".to_string(),
        }
    }

    #[test]
    fn test_api_response_error_display() {
        let error = sample_response_error();
        assert_eq!(
            error.to_string(),
            "TooManyRequests: You are being rate limited."
        );
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxRetriesExceededError {
            status: 429,
            tries: 3,
            last_error: sample_response_error(),
        };
        let message = error.to_string();
        assert!(message.contains("maximum retry count of 3"));
        assert!(message.contains("TooManyRequests"));
    }

    #[test]
    fn test_http_error_is_transparent_for_response() {
        let error = HttpError::from(sample_response_error());
        assert_eq!(
            error.to_string(),
            "TooManyRequests: You are being rate limited."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &sample_response_error();
        let _ = response;

        let max_retries: &dyn std::error::Error = &MaxRetriesExceededError {
            status: 429,
            tries: 3,
            last_error: sample_response_error(),
        };
        let _ = max_retries;
    }
}
