//! Sort and pagination query options for list endpoints.
//!
//! [`SortOptions`] is forwarded verbatim to the API as query parameters. The
//! SDK never interprets its contents, with one exception: paginated traversal
//! overwrites the `page` field as it walks through a listing.

use serde::Serialize;

/// The direction of a sorted listing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (smallest first).
    Asc,
    /// Descending order (largest first).
    Desc,
}

/// Optional sort and pagination parameters for list endpoints.
///
/// Recognized options are defined by the remote API, not by the SDK; unset
/// fields are omitted from the query string entirely.
///
/// # Example
///
/// ```rust
/// use builtbybit_api::{SortOptions, SortOrder};
///
/// let sort = SortOptions::new()
///     .sort("purchase_date")
///     .order(SortOrder::Desc)
///     .page(2);
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SortOptions {
    /// The name of the field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// The direction to sort in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// The page of the listing to request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SortOptions {
    /// Creates an empty set of sort options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field to sort by.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the requested page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
