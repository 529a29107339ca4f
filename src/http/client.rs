//! HTTP client for BuiltByBit API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the BuiltByBit API with automatic rate-limit retry handling.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ApiConfig, ApiToken};
use crate::http::errors::{ApiResponseError, HttpError, MaxRetriesExceededError};
use crate::http::response::{fallback_error, ResponseEnvelope};
use crate::sort::SortOptions;

/// Fallback retry wait time in milliseconds when no `Retry-After` is present.
pub const RETRY_WAIT_MS: u64 = 1000;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BuiltByBit API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the `Authorization` token
/// - Response envelope unwrapping (`result`/`data`/`error`)
/// - Automatic retry for 429 and 500 responses when a retry budget is configured
///
/// Every response body is an envelope; [`HttpClient::get`], [`HttpClient::post`]
/// and [`HttpClient::patch`] unwrap it and deserialize the `data` payload into
/// the requested type.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use builtbybit_api::{ApiConfig, ApiToken, HttpClient};
///
/// let token = ApiToken::private("my-token")?;
/// let client = HttpClient::new(&token, &ApiConfig::default());
///
/// let member: serde_json::Value = client.get("/members/self", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.builtbybit.com/v1`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// The per-page item convention used by paginated traversal.
    page_size: usize,
    /// Number of attempts allowed for rate-limited requests.
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticating with the given token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(token: &ApiToken, config: &ApiConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}BuiltByBit API SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), token.header_value());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            page_size: config.page_size(),
            tries: config.http_tries(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the per-page item convention used by paginated traversal.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sends a GET request and deserializes the response `data` payload.
    ///
    /// The optional [`SortOptions`] are forwarded verbatim as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for API-level errors,
    /// [`HttpError::Network`] for connection failures, and
    /// [`HttpError::Decode`] if `data` does not match the expected shape.
    pub async fn get<T>(&self, path: &str, sort: Option<&SortOptions>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let data = self
            .send(reqwest::Method::GET, path, sort, None::<&()>)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Sends a POST request with a JSON body and deserializes the response
    /// `data` payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as described on [`HttpClient::get`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let data = self
            .send(reqwest::Method::POST, path, None, Some(body))
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Sends a PATCH request with a JSON body and deserializes the response
    /// `data` payload.
    ///
    /// Mutation endpoints typically return no `data`; request `()` as the
    /// response type in that case.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] as described on [`HttpClient::get`].
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let data = self
            .send(reqwest::Method::PATCH, path, None, Some(body))
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Internal helper to build, send, and unwrap a single request.
    ///
    /// Retries 429 and 500 responses until the configured retry budget is
    /// exhausted, honoring the API's `Retry-After` header (milliseconds).
    async fn send<B>(
        &self,
        method: reqwest::Method,
        path: &str,
        sort: Option<&SortOptions>,
        body: Option<&B>,
    ) -> Result<serde_json::Value, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            // reqwest builders are single-use; rebuild per attempt.
            let mut req_builder = self.client.request(method.clone(), &url);
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(sort) = sort {
                req_builder = req_builder.query(sort);
            }
            if let Some(body) = body {
                req_builder = req_builder.json(body);
            }

            let res = req_builder.send().await?;

            let status = res.status().as_u16();
            let success = res.status().is_success();
            let retry_after = Self::parse_retry_after(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let error = match serde_json::from_str::<ResponseEnvelope>(&body_text) {
                Ok(ResponseEnvelope::Success { data }) if success => return Ok(data),
                // A success envelope under a failure status is malformed;
                // treat it like any other undecodable failure body.
                Ok(ResponseEnvelope::Success { .. }) => fallback_error(status, &body_text),
                Ok(ResponseEnvelope::Error { error }) => error.into_error(status),
                Err(decode) if success => return Err(decode.into()),
                Err(_) => fallback_error(status, &body_text),
            };

            let should_retry = status == 429 || status == 500;
            if !should_retry {
                return Err(error.into());
            }

            if attempt >= self.tries {
                return Err(Self::exhausted(error, self.tries));
            }

            let delay_ms = retry_after.unwrap_or(RETRY_WAIT_MS);
            tracing::warn!(status, attempt, delay_ms, path, "request rejected, retrying");
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        }
    }

    /// Parses the `Retry-After` header, which the API reports in milliseconds.
    fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
        headers
            .get("Retry-After")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
    }

    /// Builds the terminal error once the retry budget is spent.
    ///
    /// With a budget of one the request was never retried, so the plain
    /// response error is surfaced instead of a retry-exhaustion wrapper.
    fn exhausted(error: ApiResponseError, tries: u32) -> HttpError {
        if tries == 1 {
            return error.into();
        }
        MaxRetriesExceededError {
            status: error.status,
            tries,
            last_error: error,
        }
        .into()
    }
}
