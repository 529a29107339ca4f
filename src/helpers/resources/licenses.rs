//! License-related API endpoints for resources.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A license issued for a resource.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct License {
    pub license_id: u64,
    pub purchaser_id: u64,
    pub validated: bool,
    pub permanent: bool,
    pub active: bool,
    pub start_date: u64,
    /// Zero for permanent licenses.
    pub end_date: u64,
}

/// Fields for issuing or modifying a license.
///
/// Permanent licenses take only `active`; temporary licenses take the date
/// range. Unset fields are omitted from the request.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LicenseFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<u64>,
}

#[derive(Serialize)]
struct NewLicense<'a> {
    purchaser_id: u64,
    #[serde(flatten)]
    fields: &'a LicenseFields,
}

/// A helper for license-related API endpoints.
#[derive(Debug, Clone)]
pub struct LicensesHelper {
    http: Arc<HttpClient>,
}

impl LicensesHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of licenses for a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<License>, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/licenses"), sort)
            .await
    }

    /// Lists all pages of licenses for a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        resource_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<License>, HttpError> {
        self.http
            .list_all(&format!("/resources/{resource_id}/licenses"), sort)
            .await
    }

    /// Lists pages of licenses for a resource until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        resource_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<License>, HttpError>
    where
        F: FnMut(&License) -> bool,
    {
        self.http
            .list_until(
                &format!("/resources/{resource_id}/licenses"),
                should_continue,
                sort,
            )
            .await
    }

    /// Fetches a license for a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, resource_id: u64, license_id: u64) -> Result<License, HttpError> {
        self.http
            .get(&format!("/resources/{resource_id}/licenses/{license_id}"), None)
            .await
    }

    /// Issues a new license for a resource, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn issue(
        &self,
        resource_id: u64,
        purchaser_id: u64,
        fields: &LicenseFields,
    ) -> Result<u64, HttpError> {
        self.http
            .post(
                &format!("/resources/{resource_id}/licenses"),
                &NewLicense {
                    purchaser_id,
                    fields,
                },
            )
            .await
    }

    /// Modifies an existing license for a resource.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn modify(
        &self,
        resource_id: u64,
        license_id: u64,
        fields: &LicenseFields,
    ) -> Result<(), HttpError> {
        self.http
            .patch(
                &format!("/resources/{resource_id}/licenses/{license_id}"),
                fields,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_license_flattens_fields() {
        let fields = LicenseFields {
            permanent: Some(true),
            active: Some(true),
            ..LicenseFields::default()
        };
        let body = serde_json::to_value(NewLicense {
            purchaser_id: 5,
            fields: &fields,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"purchaser_id": 5, "permanent": true, "active": true})
        );
    }
}
