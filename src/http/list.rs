//! Predicate-driven traversal of paginated list endpoints.
//!
//! List endpoints return at most [`crate::config::ITEMS_PER_PAGE`] items per
//! request. [`HttpClient::list_until`] walks pages sequentially, aggregating
//! items in request order, until the listing is exhausted or a caller-supplied
//! predicate declines continuation.

use serde::de::DeserializeOwned;

use crate::http::client::HttpClient;
use crate::http::errors::HttpError;
use crate::sort::SortOptions;

/// The page number of the first page of any listing.
const FIRST_PAGE: u32 = 1;

impl HttpClient {
    /// Fetches consecutive pages of a list endpoint until a condition is no
    /// longer met, returning every item fetched in request order.
    ///
    /// Pages are requested strictly sequentially, starting at page 1. After
    /// each page, traversal stops when:
    ///
    /// - the page carries fewer items than the per-page convention (including
    ///   none at all) — the listing is exhausted, which is not an error; or
    /// - `should_continue` returns `false` for the **last item** of the page
    ///   just fetched. The predicate is evaluated once per page, against that
    ///   final item only, so the items of the stopping page are always
    ///   included in the result.
    ///
    /// The caller's [`SortOptions`] are forwarded verbatim to every request;
    /// only the `page` field is overwritten as the traversal advances.
    ///
    /// An empty first page yields `Ok(vec![])` after exactly one request.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`] while fetching a page aborts the whole traversal and
    /// discards items accumulated so far; the call is all-or-nothing. No
    /// retry happens at this layer.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Collect replies until one older than a cutoff is seen.
    /// let replies: Vec<Reply> = client
    ///     .list_until("/threads/42/replies", |reply: &Reply| reply.post_date > cutoff, None)
    ///     .await?;
    /// ```
    pub async fn list_until<T, F>(
        &self,
        path: &str,
        mut should_continue: F,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<T>, HttpError>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let mut items = Vec::new();
        let mut sort = sort.cloned().unwrap_or_default();
        let mut page = FIRST_PAGE;

        loop {
            sort.page = Some(page);
            let fetched: Vec<T> = self.get(path, Some(&sort)).await?;
            let fetched_len = fetched.len();
            items.extend(fetched);

            tracing::debug!(path, page, count = fetched_len, "fetched listing page");

            // A short page has no successor.
            if fetched_len < self.page_size() {
                break;
            }

            // items is non-empty here: a full page was just appended.
            match items.last() {
                Some(last) if should_continue(last) => {}
                _ => break,
            }

            page += 1;
        }

        Ok(items)
    }

    /// Fetches every page of a list endpoint.
    ///
    /// Equivalent to [`HttpClient::list_until`] with a predicate that always
    /// continues.
    ///
    /// # Errors
    ///
    /// As for [`HttpClient::list_until`].
    pub async fn list_all<T>(
        &self,
        path: &str,
        sort: Option<&SortOptions>,
    ) -> Result<Vec<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        self.list_until(path, |_: &T| true, sort).await
    }
}
