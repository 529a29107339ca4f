//! Version-related API endpoints for resources.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A released version of a resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Version {
    pub version_id: u64,
    pub name: String,
    pub release_date: u64,
    pub download_count: u64,
}

/// A helper for version-related API endpoints.
#[derive(Debug, Clone)]
pub struct VersionsHelper {
    http: Arc<HttpClient>,
}

impl VersionsHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of versions of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Version>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/versions"), sort)
            .await
    }

    /// Lists all pages of versions of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Version>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/versions"), sort)
            .await
    }

    /// Lists pages of versions of a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Version>, HttpError>
    where
        F: FnMut(&Version) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/versions"),
                should_continue,
                sort,
            )
            .await
    }

    /// Fetches a version of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, resource_id: u64, version_id: u64) -> Result<Version, HttpError> {
        self.http
            .get(
                &format!("/resources/{resource_id}/versions/{version_id}"),
                None,
            )
            .await
    }

    /// Fetches the latest version of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn latest(&self, resource_id: u64) -> Result<Version, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/versions/latest"), None)
            .await
    }
}
