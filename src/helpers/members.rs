//! Member-related API endpoints.

use std::sync::Arc;

use serde::Deserialize;

use crate::helpers::profile_posts::ProfilePostsHelper;
use crate::http::{HttpClient, HttpError};

/// Detailed information about a member.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub member_id: u64,
    pub username: String,
    pub join_date: u64,
    #[serde(default)]
    pub last_activity_date: Option<u64>,
    pub banned: bool,
    pub suspended: bool,
    pub restricted: bool,
    pub premium: bool,
    pub supreme: bool,
    pub ultimate: bool,
    #[serde(default)]
    pub discord_id: Option<u64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub post_count: u64,
    pub resource_count: u64,
    pub purchase_count: u64,
    pub feedback_positive: u64,
    pub feedback_neutral: u64,
    pub feedback_negative: u64,
}

/// A recently issued ban.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Ban {
    pub member_id: u64,
    pub banned_by_id: u64,
    pub ban_date: u64,
    pub reason: String,
}

/// A helper for member-related API endpoints.
#[derive(Debug, Clone)]
pub struct MembersHelper {
    http: Arc<HttpClient>,
    profile_posts: ProfilePostsHelper,
}

impl MembersHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        let profile_posts = ProfilePostsHelper::new(Arc::clone(&http));
        Self { http, profile_posts }
    }

    /// Returns the helper for profile posts on your own profile.
    #[must_use]
    pub const fn profile_posts(&self) -> &ProfilePostsHelper {
        &self.profile_posts
    }

    /// Fetches detailed information about yourself.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn self_info(&self) -> Result<Member, HttpError> {
        self.http.get("/members/self", None).await
    }

    /// Fetches detailed information about a member.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, member_id: u64) -> Result<Member, HttpError> {
        self.http.get(&format!("/members/{member_id}"), None).await
    }

    /// Fetches detailed information about a member by username.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch_by_username(&self, username: &str) -> Result<Member, HttpError> {
        self.http
            .get(&format!("/members/usernames/{username}"), None)
            .await
    }

    /// Fetches a list of recently issued bans.
    ///
    /// The API returns this listing whole; it is not paginated.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn bans(&self) -> Result<Vec<Ban>, HttpError> {
        self.http.get("/members/bans", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserializes_with_optional_fields_absent() {
        let member: Member = serde_json::from_str(
            r#"{
                "member_id": 87939,
                "username": "Harry",
                "join_date": 1577836800,
                "banned": false,
                "suspended": false,
                "restricted": false,
                "premium": true,
                "supreme": false,
                "ultimate": false,
                "post_count": 100,
                "resource_count": 2,
                "purchase_count": 10,
                "feedback_positive": 5,
                "feedback_neutral": 0,
                "feedback_negative": 0
            }"#,
        )
        .unwrap();
        assert_eq!(member.username, "Harry");
        assert!(member.discord_id.is_none());
        assert!(member.avatar_url.is_none());
    }
}
