//! Resource-related API endpoints.
//!
//! The marketplace groups several listings under a resource: downloads,
//! licenses, purchases, reviews, updates, and versions. Each has its own
//! child helper, reachable through [`ResourcesHelper`].

mod downloads;
mod licenses;
mod purchases;
mod reviews;
mod updates;
mod versions;

pub use downloads::{Download, DownloadsHelper};
pub use licenses::{License, LicenseFields, LicensesHelper};
pub use purchases::{Purchase, PurchasesHelper};
pub use reviews::{Review, ReviewsHelper};
pub use updates::{Update, UpdatesHelper};
pub use versions::{Version, VersionsHelper};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A resource as returned by the resource listing endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BasicResource {
    pub resource_id: u64,
    pub author_id: u64,
    pub title: String,
    pub tag_line: String,
    pub price: u64,
    pub currency: String,
}

/// Detailed information about a single resource.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Resource {
    pub resource_id: u64,
    pub author_id: u64,
    pub title: String,
    pub tag_line: String,
    pub description: String,
    pub release_date: u64,
    pub last_update_date: u64,
    #[serde(default)]
    pub category_title: Option<String>,
    pub current_version_id: u64,
    pub price: u64,
    pub currency: String,
    pub purchase_count: u64,
    pub download_count: u64,
    pub review_count: u64,
    pub review_average: f64,
}

/// Editable fields of a resource you own or collaborate on.
///
/// Unset fields are omitted from the request and left unchanged.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ResourceEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A helper for resource-related API endpoints.
#[derive(Debug, Clone)]
pub struct ResourcesHelper {
    http: Arc<HttpClient>,
    downloads: DownloadsHelper,
    licenses: LicensesHelper,
    purchases: PurchasesHelper,
    reviews: ReviewsHelper,
    updates: UpdatesHelper,
    versions: VersionsHelper,
}

impl ResourcesHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self {
            downloads: DownloadsHelper::new(Arc::clone(&http)),
            licenses: LicensesHelper::new(Arc::clone(&http)),
            purchases: PurchasesHelper::new(Arc::clone(&http)),
            reviews: ReviewsHelper::new(Arc::clone(&http)),
            updates: UpdatesHelper::new(Arc::clone(&http)),
            versions: VersionsHelper::new(Arc::clone(&http)),
            http,
        }
    }

    /// Returns the helper for resource downloads.
    #[must_use]
    pub const fn downloads(&self) -> &DownloadsHelper {
        &self.downloads
    }

    /// Returns the helper for resource licenses.
    #[must_use]
    pub const fn licenses(&self) -> &LicensesHelper {
        &self.licenses
    }

    /// Returns the helper for resource purchases.
    #[must_use]
    pub const fn purchases(&self) -> &PurchasesHelper {
        &self.purchases
    }

    /// Returns the helper for resource reviews.
    #[must_use]
    pub const fn reviews(&self) -> &ReviewsHelper {
        &self.reviews
    }

    /// Returns the helper for resource updates.
    #[must_use]
    pub const fn updates(&self) -> &UpdatesHelper {
        &self.updates
    }

    /// Returns the helper for resource versions.
    #[must_use]
    pub const fn versions(&self) -> &VersionsHelper {
        &self.versions
    }

    /// Lists a single page of public resources.
    ///
    /// No multi-page variant is provided for the public listing. It would
    /// encourage undue scraping of the public resource list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, sort: Option<&SortOptions>) -> Result<Vec<BasicResource>, HttpError> {
        self.http.get("/resources", sort).await
    }

    /// Lists a single page of resources you own.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_owned(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError> {
        self.http.get("/resources/owned", sort).await
    }

    /// Lists all pages of resources you own.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_owned_all(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError> {
        self.http.list_all("/resources/owned", sort).await
    }

    /// Lists pages of resources you own until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_owned_until<F>(
        &self,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError>
    where
        F: FnMut(&BasicResource) -> bool,
    {
        self.http
            .list_until("/resources/owned", should_continue, sort)
            .await
    }

    /// Lists a single page of resources you collaborate on.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_collaborated(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError> {
        self.http.get("/resources/collaborated", sort).await
    }

    /// Lists all pages of resources you collaborate on.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_collaborated_all(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError> {
        self.http.list_all("/resources/collaborated", sort).await
    }

    /// Lists pages of resources you collaborate on until a condition is no
    /// longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_collaborated_until<F>(
        &self,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicResource>, HttpError>
    where
        F: FnMut(&BasicResource) -> bool,
    {
        self.http
            .list_until("/resources/collaborated", should_continue, sort)
            .await
    }

    /// Fetches detailed information about a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, resource_id: u64) -> Result<Resource, HttpError> {
        self.http.get(&format!("/resources/{resource_id}"), None).await
    }

    /// Edits fields of a resource you own or collaborate on.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn edit(&self, resource_id: u64, fields: &ResourceEdit) -> Result<(), HttpError> {
        self.http
            .patch(&format!("/resources/{resource_id}"), fields)
            .await
    }
}
