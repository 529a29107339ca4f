//! Profile-post API endpoints for your own profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A post on your member profile.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfilePost {
    pub profile_post_id: u64,
    pub author_id: u64,
    pub post_date: u64,
    pub message: String,
    pub comment_count: u64,
}

#[derive(Serialize)]
struct EditedPost<'a> {
    message: &'a str,
}

/// A helper for profile posts on your own member profile.
#[derive(Debug, Clone)]
pub struct ProfilePostsHelper {
    http: Arc<HttpClient>,
}

impl ProfilePostsHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of posts on your profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, sort: Option<&SortOptions>) -> Result<Vec<ProfilePost>, HttpError> {
        self.http.get("/members/self/profile-posts", sort).await
    }

    /// Lists all pages of posts on your profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<ProfilePost>, HttpError> {
        self.http.list_all("/members/self/profile-posts", sort).await
    }

    /// Lists pages of posts on your profile until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<ProfilePost>, HttpError>
    where
        F: FnMut(&ProfilePost) -> bool,
    {
        self.http
            .list_until("/members/self/profile-posts", should_continue, sort)
            .await
    }

    /// Fetches information about a post on your profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, profile_post_id: u64) -> Result<ProfilePost, HttpError> {
        self.http
            .get(&format!("/members/self/profile-posts/{profile_post_id}"), None)
            .await
    }

    /// Edits the message of a post on your profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn edit(&self, profile_post_id: u64, message: &str) -> Result<(), HttpError> {
        self.http
            .patch(
                &format!("/members/self/profile-posts/{profile_post_id}"),
                &EditedPost { message },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_post_deserializes() {
        let post: ProfilePost = serde_json::from_str(
            r#"{
                "profile_post_id": 9,
                "author_id": 2,
                "post_date": 1640995200,
                "message": "Welcome!",
                "comment_count": 1
            }"#,
        )
        .unwrap();
        assert_eq!(post.profile_post_id, 9);
        assert_eq!(post.message, "Welcome!");
    }
}
