//! Download-related API endpoints for resources.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A recorded download of a resource version.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Download {
    pub download_id: u64,
    pub version_id: u64,
    pub downloader_id: u64,
    pub download_date: u64,
}

/// A helper for download-related API endpoints.
#[derive(Debug, Clone)]
pub struct DownloadsHelper {
    http: Arc<HttpClient>,
}

impl DownloadsHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of downloads of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Download>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/downloads"), sort)
            .await
    }

    /// Lists all pages of downloads of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Download>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/downloads"), sort)
            .await
    }

    /// Lists pages of downloads of a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Download>, HttpError>
    where
        F: FnMut(&Download) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/downloads"),
                should_continue,
                sort,
            )
            .await
    }
}
