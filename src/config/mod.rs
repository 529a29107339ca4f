//! Configuration types for the BuiltByBit API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with BuiltByBit.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all SDK settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use builtbybit_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.builtbybit.com/v1").unwrap())
//!     .user_agent_prefix("MyBot/1.0")
//!     .http_tries(3)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl, TokenKind};

use crate::error::ConfigError;

/// The number of items the API returns per full page of a list endpoint.
///
/// Paginated traversal uses this convention to detect the final page: a page
/// carrying fewer items than this has no successor.
pub const ITEMS_PER_PAGE: usize = 20;

/// Configuration for the BuiltByBit API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// base URL, the User-Agent prefix, the server's per-page item convention,
/// and the rate-limit retry budget.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use builtbybit_api::ApiConfig;
///
/// let config = ApiConfig::builder()
///     .http_tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.http_tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    page_size: usize,
    http_tries: u32,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-page item convention used to detect the final page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of attempts made for rate-limited requests.
    #[must_use]
    pub const fn http_tries(&self) -> u32 {
        self.http_tries
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::production(),
            user_agent_prefix: None,
            page_size: ITEMS_PER_PAGE,
            http_tries: 1,
        }
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. All fields
/// have sensible defaults, so an empty builder produces the production
/// configuration.
///
/// # Defaults
///
/// - `base_url`: `https://api.builtbybit.com/v1`
/// - `user_agent_prefix`: `None`
/// - `page_size`: [`ITEMS_PER_PAGE`]
/// - `http_tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    page_size: Option<usize>,
    http_tries: Option<u32>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    ///
    /// Override this to target a proxy or a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-page item convention.
    ///
    /// Paginated traversal stops once a page carries fewer items than this.
    /// Only override this if the remote API changes its page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the number of attempts made for rate-limited requests.
    ///
    /// A value of `1` disables retries entirely.
    #[must_use]
    pub const fn http_tries(mut self, tries: u32) -> Self {
        self.http_tries = Some(tries);
        self
    }

    /// Builds the [`ApiConfig`], validating numeric settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if the page size is zero, or
    /// [`ConfigError::InvalidHttpTries`] if the retry budget is zero.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let page_size = self.page_size.unwrap_or(ITEMS_PER_PAGE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize { page_size });
        }

        let http_tries = self.http_tries.unwrap_or(1);
        if http_tries == 0 {
            return Err(ConfigError::InvalidHttpTries { tries: http_tries });
        }

        Ok(ApiConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            page_size,
            http_tries,
        })
    }
}
