//! Error types for SDK configuration.
//!
//! This module contains error types used for configuration and validation
//! failures. Transport-level errors live in [`crate::http::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use builtbybit_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::private("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid BuiltByBit API token.")]
    EmptyToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL without a trailing slash (e.g., 'https://api.builtbybit.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size must be at least one.
    #[error("Invalid page size {page_size}. The per-page item convention must be at least 1.")]
    InvalidPageSize {
        /// The invalid page size that was provided.
        page_size: usize,
    },

    /// Retry budget must be at least one attempt.
    #[error("Invalid HTTP tries {tries}. At least one attempt must be allowed.")]
    InvalidHttpTries {
        /// The invalid retry budget that was provided.
        tries: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_error_message() {
        let error = ConfigError::EmptyToken;
        let message = error.to_string();
        assert!(message.contains("API token cannot be empty"));
        assert!(message.contains("valid BuiltByBit API token"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("http(s) URL"));
    }

    #[test]
    fn test_invalid_page_size_error_message() {
        let error = ConfigError::InvalidPageSize { page_size: 0 };
        assert!(error.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyToken;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
