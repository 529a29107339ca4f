//! Purchase-related API endpoints for resources.

use std::sync::Arc;

use serde::Deserialize;

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A purchase of a resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Purchase {
    pub purchase_id: u64,
    pub purchaser_id: u64,
    pub license_id: u64,
    pub renewal: bool,
    pub price: u64,
    pub currency: String,
    pub purchase_date: u64,
    pub validated: bool,
}

/// A helper for purchase-related API endpoints.
#[derive(Debug, Clone)]
pub struct PurchasesHelper {
    http: Arc<HttpClient>,
}

impl PurchasesHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of purchases of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Purchase>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/purchases"), sort)
            .await
    }

    /// Lists all pages of purchases of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Purchase>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/purchases"), sort)
            .await
    }

    /// Lists pages of purchases of a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Purchase>, HttpError>
    where
        F: FnMut(&Purchase) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/purchases"),
                should_continue,
                sort,
            )
            .await
    }

    /// Fetches a purchase of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, resource_id: u64, purchase_id: u64) -> Result<Purchase, HttpError> {
        self.http
            .get(
                &format!("/resources/{resource_id}/purchases/{purchase_id}"),
                None,
            )
            .await
    }
}
