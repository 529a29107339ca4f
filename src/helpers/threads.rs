//! Thread-related API endpoints.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClient, HttpError};
use crate::sort::SortOptions;

/// A thread as returned by the thread listing endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BasicThread {
    pub thread_id: u64,
    pub title: String,
    pub reply_count: u64,
    pub view_count: u64,
    pub creation_date: u64,
    pub last_message_date: u64,
}

/// Detailed information about a single thread.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Thread {
    pub thread_id: u64,
    pub forum_name: String,
    pub title: String,
    pub reply_count: u64,
    pub view_count: u64,
    pub post_date: u64,
    pub thread_type: String,
    pub thread_open: bool,
    pub last_post_date: u64,
}

/// A single reply within a thread.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub reply_id: u64,
    pub author_id: u64,
    pub post_date: u64,
    pub message: String,
}

#[derive(Serialize)]
struct NewReply<'a> {
    message: &'a str,
}

/// A helper for thread-related API endpoints.
///
/// All operations act on threads you own or collaborate on.
#[derive(Debug, Clone)]
pub struct ThreadsHelper {
    http: Arc<HttpClient>,
}

impl ThreadsHelper {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists a single page of threads.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(&self, sort: Option<&SortOptions>) -> Result<Vec<BasicThread>, HttpError> {
        self.http.get("/threads", sort).await
    }

    /// Lists all pages of threads.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_all(
        &self,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicThread>, HttpError> {
        self.http.list_all("/threads", sort).await
    }

    /// Lists pages of threads until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_until<F>(
        &self,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<BasicThread>, HttpError>
    where
        F: FnMut(&BasicThread) -> bool,
    {
        self.http.list_until("/threads", should_continue, sort).await
    }

    /// Fetches detailed information about a thread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn fetch(&self, thread_id: u64) -> Result<Thread, HttpError> {
        self.http.get(&format!("/threads/{thread_id}"), None).await
    }

    /// Lists a single page of replies for a thread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list_replies(
        &self,
        thread_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Reply>, HttpError> {
        self.http
            .get(&format!("/threads/{thread_id}/replies"), sort)
            .await
    }

    /// Lists all pages of replies for a thread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_replies_all(
        &self,
        thread_id: u64,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Reply>, HttpError> {
        self.http
            .list_all(&format!("/threads/{thread_id}/replies"), sort)
            .await
    }

    /// Lists pages of replies for a thread until a condition is no longer met.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if any page request fails.
    pub async fn list_replies_until<F>(
        &self,
        thread_id: u64,
        should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<Reply>, HttpError>
    where
        F: FnMut(&Reply) -> bool,
    {
        self.http
            .list_until(&format!("/threads/{thread_id}/replies"), should_continue, sort)
            .await
    }

    /// Replies to a thread, returning the identifier of the new post.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn reply(&self, thread_id: u64, message: &str) -> Result<u64, HttpError> {
        self.http
            .post(&format!("/threads/{thread_id}/replies"), &NewReply { message })
            .await
    }
}
