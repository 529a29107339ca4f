//! Integration tests for predicate-driven pagination.
//!
//! These tests verify the `list_until` traversal contract: request ordering,
//! termination on short pages, last-item-only predicate evaluation, and
//! all-or-nothing failure behavior.

use builtbybit_api::{
    ApiConfig, ApiToken, BaseUrl, BasicThread, BuiltByBitClient, HttpError, SortOptions, SortOrder,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wraps a `data` payload in the API's success envelope.
fn success(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"result": "success", "data": data}))
}

fn thread(id: u64) -> serde_json::Value {
    json!({
        "thread_id": id,
        "title": format!("Thread {id}"),
        "reply_count": 0,
        "view_count": 0,
        "creation_date": 1_640_995_200u64,
        "last_message_date": 1_641_081_600u64
    })
}

fn thread_ids(threads: &[BasicThread]) -> Vec<u64> {
    threads.iter().map(|t| t.thread_id).collect()
}

/// Creates a client against the mock server with a page-size convention of 2.
fn client_for(server: &MockServer) -> BuiltByBitClient {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .page_size(2)
        .build()
        .unwrap();
    let token = ApiToken::private("test-token").unwrap();
    BuiltByBitClient::with_config(&token, &config)
}

async fn mount_page(server: &MockServer, page: &str, data: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("page", page))
        .respond_with(success(data))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_all_concatenates_pages_in_order_and_stops_on_partial_page() {
    let server = MockServer::start().await;
    // Backing items 1..=5 with a page size of 2: two full pages and a partial one.
    mount_page(&server, "1", json!([thread(1), thread(2)])).await;
    mount_page(&server, "2", json!([thread(3), thread(4)])).await;
    mount_page(&server, "3", json!([thread(5)])).await;

    let client = client_for(&server);
    let threads = client.threads().list_all(None).await.unwrap();

    assert_eq!(thread_ids(&threads), vec![1, 2, 3, 4, 5]);
    // The partial third page terminates the traversal; no fourth request.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_until_stops_after_page_whose_last_item_declines() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!([thread(1), thread(2)])).await;
    mount_page(&server, "2", json!([thread(3), thread(4)])).await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("page", "3"))
        .respond_with(success(json!([thread(5)])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let threads = client
        .threads()
        .list_until(|t| t.thread_id != 4, None)
        .await
        .unwrap();

    // The stopping page's items are still included.
    assert_eq!(thread_ids(&threads), vec![1, 2, 3, 4]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_predicate_is_evaluated_against_last_item_only() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!([thread(1), thread(2)])).await;
    mount_page(&server, "2", json!([thread(3), thread(4)])).await;
    mount_page(&server, "3", json!([thread(5)])).await;

    let client = client_for(&server);
    // Declines on item 3, but 3 is never the last item of its page, so the
    // traversal runs to exhaustion.
    let threads = client
        .threads()
        .list_until(|t| t.thread_id != 3, None)
        .await
        .unwrap();

    assert_eq!(thread_ids(&threads), vec![1, 2, 3, 4, 5]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_single_page_list_issues_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .respond_with(success(json!([thread(1), thread(2)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let threads = client.threads().list(None).await.unwrap();

    // A full page does not trigger a follow-up request.
    assert_eq!(thread_ids(&threads), vec![1, 2]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_first_page_yields_empty_result_with_one_request() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!([])).await;

    let client = client_for(&server);

    let all = client.threads().list_all(None).await.unwrap();
    assert!(all.is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    let until = client
        .threads()
        .list_until(|_| panic!("predicate must not run on an empty listing"), None)
        .await
        .unwrap();
    assert!(until.is_empty());
}

#[tokio::test]
async fn test_transport_failure_mid_traversal_discards_partial_results() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!([thread(1), thread(2)])).await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "result": "error",
            "error": {"code": "PermissionError", "message": "No permission."}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.threads().list_all(None).await;

    // All-or-nothing: the page-1 items are not surfaced.
    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.status, 403);
            assert_eq!(e.code, "PermissionError");
        }
        other => panic!("expected response error, got {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_all_is_idempotent_against_unchanged_listing() {
    let server = MockServer::start().await;
    mount_page(&server, "1", json!([thread(1), thread(2)])).await;
    mount_page(&server, "2", json!([thread(3)])).await;

    let client = client_for(&server);
    let first = client.threads().list_all(None).await.unwrap();
    let second = client.threads().list_all(None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_sort_options_are_forwarded_to_every_page_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("sort", "creation_date"))
        .and(query_param("order", "desc"))
        .and(query_param("page", "1"))
        .respond_with(success(json!([thread(2), thread(1)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("sort", "creation_date"))
        .and(query_param("order", "desc"))
        .and(query_param("page", "2"))
        .respond_with(success(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sort = SortOptions::new()
        .sort("creation_date")
        .order(SortOrder::Desc);
    let threads = client.threads().list_all(Some(&sort)).await.unwrap();

    assert_eq!(thread_ids(&threads), vec![2, 1]);
}

#[tokio::test]
async fn test_caller_page_field_is_overwritten_by_traversal() {
    let server = MockServer::start().await;
    // Even if the caller pre-set a page, traversal starts from page 1.
    mount_page(&server, "1", json!([thread(1)])).await;

    let client = client_for(&server);
    let sort = SortOptions::new().page(7);
    let threads = client.threads().list_all(Some(&sort)).await.unwrap();

    assert_eq!(thread_ids(&threads), vec![1]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
