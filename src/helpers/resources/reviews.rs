//! Review-related API endpoints for resources.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A review left on a resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub review_id: u64,
    pub reviewer_id: u64,
    pub review_date: u64,
    pub rating: u8,
    pub message: String,
    /// The author's response, if one has been left.
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Serialize)]
struct ReviewResponse<'a> {
    response: &'a str,
}

/// A helper for review-related API endpoints.
#[derive(Debug, Clone)]
pub struct ReviewsHelper {
    http: Arc<HttpClient>,
}

impl ReviewsHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of reviews of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Review>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/reviews"), sort)
            .await
    }

    /// Lists all pages of reviews of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Review>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/reviews"), sort)
            .await
    }

    /// Lists pages of reviews of a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Review>, HttpError>
    where
        F: FnMut(&Review) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/reviews"),
                should_continue,
                sort,
            )
            .await
    }

    /// Responds to a review of a resource you own or collaborate on.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn respond(
        &self,
        resource_id: u64,
        review_id: u64,
        response: &str,
    ) -> Result<(), HttpError> {
        self.http
            .patch(
                &format!("/resources/{resource_id}/reviews/{review_id}"),
                &ReviewResponse { response },
            )
            .await
    }
}
