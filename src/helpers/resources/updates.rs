//! Update-related API endpoints for resources.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// An update posted for a resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Update {
    pub update_id: u64,
    pub title: String,
    pub message: String,
    pub update_date: u64,
}

/// A helper for update-related API endpoints.
#[derive(Debug, Clone)]
pub struct UpdatesHelper {
    http: Arc<HttpClient>,
}

impl UpdatesHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of updates of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Update>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/updates"), sort)
            .await
    }

    /// Lists all pages of updates of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Update>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/updates"), sort)
            .await
    }

    /// Lists pages of updates of a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Update>, HttpError>
    where
        F: FnMut(&Update) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/updates"),
                should_continue,
                sort,
            )
            .await
    }

    /// Fetches the latest update of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn latest(&self, resource_id: u64) -> Result<Update, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/updates/latest"), None)
            .await
    }
}
