//! The top-level BuiltByBit API client.

use std::sync::Arc;

use crate::config::{ApiConfig, ApiToken};
use crate::helpers::{MembersHelper, ResourcesHelper, ThreadsHelper};
use crate::http::{HttpClient, HttpError};

/// The top-level client for the BuiltByBit API.
///
/// Holds one instance of each resource-area helper; every helper shares a
/// single [`HttpClient`]. The client is cheap to clone and safe to share
/// across async tasks, and independent calls may run concurrently — no state
/// is shared between requests beyond the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use builtbybit_api::{ApiToken, BuiltByBitClient};
///
/// let token = ApiToken::private("my-token")?;
/// let client = BuiltByBitClient::new(&token);
///
/// client.health().await?;
///
/// let me = client.members().self_info().await?;
/// println!("Authenticated as {}", me.username);
///
/// let threads = client.threads().list_all(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BuiltByBitClient {
    http: Arc<HttpClient>,
    threads: ThreadsHelper,
    members: MembersHelper,
    resources: ResourcesHelper,
}

// Verify BuiltByBitClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BuiltByBitClient>();
};

impl BuiltByBitClient {
    /// Creates a new client with the default configuration.
    #[must_use]
    pub fn new(token: &ApiToken) -> Self {
        Self::with_config(token, &ApiConfig::default())
    }

    /// Creates a new client with the given configuration.
    #[must_use]
    pub fn with_config(token: &ApiToken, config: &ApiConfig) -> Self {
        let http = Arc::new(HttpClient::new(token, config));
        Self {
            threads: ThreadsHelper::new(Arc::clone(&http)),
            members: MembersHelper::new(Arc::clone(&http)),
            resources: ResourcesHelper::new(Arc::clone(&http)),
            http,
        }
    }

    /// Returns the helper for thread-related endpoints.
    #[must_use]
    pub const fn threads(&self) -> &ThreadsHelper {
        &self.threads
    }

    /// Returns the helper for member-related endpoints.
    #[must_use]
    pub const fn members(&self) -> &MembersHelper {
        &self.members
    }

    /// Returns the helper for resource-related endpoints.
    #[must_use]
    pub const fn resources(&self) -> &ResourcesHelper {
        &self.resources
    }

    /// Returns the underlying HTTP client.
    ///
    /// Useful for endpoints not yet covered by a helper.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Checks that the API is reachable and the token is usable.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the health endpoint cannot be reached or
    /// reports a problem.
    pub async fn health(&self) -> Result<(), HttpError> {
        let status: String = self.http.get("/health", None).await?;
        tracing::debug!(%status, "health check completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BuiltByBitClient>();
    }

    #[test]
    fn test_helpers_share_one_transport() {
        let token = ApiToken::private("test-token").unwrap();
        let client = BuiltByBitClient::new(&token);

        // All accessors are wired up against the same base URL.
        assert_eq!(client.http().base_url(), "https://api.builtbybit.com/v1");
        let _ = client.threads();
        let _ = client.members().profile_posts();
        let _ = client.resources().licenses();
    }
}
