//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The kind of BuiltByBit API token.
///
/// Determines the scheme used in the `Authorization` header. Private tokens
/// act on behalf of the account that issued them; shared tokens act on behalf
/// of the member who granted access to a third-party application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A private token issued for your own account.
    Private,
    /// A shared token granted to a third-party application.
    Shared,
}

impl TokenKind {
    /// Returns the scheme string used in the `Authorization` header.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Shared => "Shared",
        }
    }
}

/// A validated BuiltByBit API token.
///
/// This newtype ensures the token value is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiToken(Private, *****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use builtbybit_api::ApiToken;
///
/// let token = ApiToken::private("my-token").unwrap();
/// assert_eq!(token.header_value(), "Private my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(Private, *****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken {
    kind: TokenKind,
    value: String,
}

impl ApiToken {
    /// Creates a new validated token of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the value is empty.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self { kind, value })
    }

    /// Creates a new validated private token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the value is empty.
    pub fn private(value: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(TokenKind::Private, value)
    }

    /// Creates a new validated shared token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the value is empty.
    pub fn shared(value: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(TokenKind::Shared, value)
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the full `Authorization` header value for this token.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{} {}", self.kind.scheme(), self.value)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({}, *****)", self.kind.scheme())
    }
}

/// A validated API base URL.
///
/// This newtype validates that the URL carries an http(s) scheme and
/// normalizes away any trailing slash so endpoint paths (which always start
/// with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use builtbybit_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.builtbybit.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.builtbybit.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production BuiltByBit API base URL.
    pub const PRODUCTION: &'static str = "https://api.builtbybit.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not use an http(s) scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        let trimmed = url.trim_end_matches('/');
        if trimmed == "https:" || trimmed == "http:" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the production BuiltByBit base URL.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
