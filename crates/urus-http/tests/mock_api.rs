//! Mock API tests for the HTTP gateway.
//!
//! These tests use wiremock to simulate the admin API and exercise the
//! gateway's request shapes and response handling without network access.

use serde_json::json;
use urus_core::{
    ApiUrl, BearerToken, CollectionGateway, FileUpload, PageRequest, RecordRef, UpdatePayload,
};
use urus_http::HttpGateway;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a gateway against a mock server.
fn mock_gateway(server: &MockServer) -> HttpGateway {
    let base = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    HttpGateway::new(base)
}

fn token() -> BearerToken {
    BearerToken::new("test-access-token")
}

fn list_body(names: &[&str], next: Option<&str>, total: u64) -> serde_json::Value {
    let items: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": {"iv": format!("iv{i}"), "encryptedData": format!("ct{i}")},
                "name": name,
                "description": "desc",
                "image": "https://cdn.example.com/img.png"
            })
        })
        .collect();
    json!({
        "data": {
            "data": items,
            "next": next,
            "previous": null,
            "total": total
        }
    })
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn list_by_offset_sends_limit_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/banner"))
        .and(query_param("limit", "5"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(&["Spring", "Summer"], None, 7)),
        )
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    let page = gateway
        .list("api/admin/banner", &PageRequest::ByOffset(2), 5, &token())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].value.get_str("name"), Some("Spring"));
    assert_eq!(page.total, Some(7));
    assert!(page.next.is_none());
}

#[tokio::test]
async fn list_by_cursor_follows_cursor_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/banner"))
        .and(query_param("limit", "5"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["Autumn"], None, 11)))
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    let cursor = format!(
        "http://127.0.0.1:{}/api/admin/banner?limit=5&page=3",
        server.address().port()
    );
    let page = gateway
        .list(
            "api/admin/banner",
            &PageRequest::ByCursor(cursor),
            5,
            &token(),
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].value.get_str("name"), Some("Autumn"));
}

#[tokio::test]
async fn list_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/component"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&[], None, 0)))
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    let page = gateway
        .list("api/admin/component", &PageRequest::ByOffset(1), 4, &token())
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, Some(0));
}

#[tokio::test]
async fn list_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/banner"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    let result = gateway
        .list("api/admin/banner", &PageRequest::ByOffset(1), 5, &token())
        .await;

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("500"));
}

#[tokio::test]
async fn list_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/banner"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NotFound",
            "message": "no such collection"
        })))
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    let err = gateway
        .list("api/admin/banner", &PageRequest::ByOffset(1), 5, &token())
        .await
        .unwrap_err()
        .to_string();

    assert!(err.contains("404"));
    assert!(err.contains("no such collection"));
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn update_puts_multipart_to_token_path() {
    let server = MockServer::start().await;

    let id = RecordRef::new("a", "b").unwrap().encode().unwrap();
    let expected_path = format!("/api/admin/banner/{}", id.as_str());

    Mock::given(method("PUT"))
        .and(path(expected_path.as_str()))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = UpdatePayload::new();
    payload.push_text("name", "Spring banner");
    payload.push_file(
        "image",
        FileUpload {
            file_name: "banner.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3, 4],
        },
    );

    let gateway = mock_gateway(&server);
    gateway
        .update("api/admin/banner", &id, &payload, &token())
        .await
        .unwrap();
}

#[tokio::test]
async fn update_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let id = RecordRef::new("a", "b").unwrap().encode().unwrap();
    let payload = UpdatePayload::new();

    let gateway = mock_gateway(&server);
    let err = gateway
        .update("api/admin/banner", &id, &payload, &token())
        .await
        .unwrap_err()
        .to_string();

    assert!(err.contains("500"));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn delete_targets_token_path() {
    let server = MockServer::start().await;

    let id = RecordRef::new("a", "b").unwrap().encode().unwrap();
    let expected_path = format!("/api/admin/newsandevent/{}", id.as_str());

    Mock::given(method("DELETE"))
        .and(path(expected_path.as_str()))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = mock_gateway(&server);
    gateway
        .delete("api/admin/newsandevent", &id, &token())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_error_includes_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Forbidden",
            "message": "not allowed"
        })))
        .mount(&server)
        .await;

    let id = RecordRef::new("a", "b").unwrap().encode().unwrap();
    let gateway = mock_gateway(&server);
    let err = gateway
        .delete("api/admin/banner", &id, &token())
        .await
        .unwrap_err()
        .to_string();

    assert!(err.contains("403"));
    assert!(err.contains("not allowed"));
}
