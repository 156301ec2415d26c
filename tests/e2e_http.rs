// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, ETAG, IF_NONE_MATCH},
};
use chrono::Duration;
use serde_json::{Value, json};
use skillogue_discovery::domain::passion::PassionId;
use tower::util::ServiceExt as _;

mod support;

use support::{InMemorySavedSearchRepo, SearchResultBuilder, TestHarness, read_json};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn valid_token() -> String {
    support::bearer_token(support::viewer_id(), Duration::hours(1))
}

#[tokio::test]
async fn health_returns_ok() {
    let app = TestHarness::new().router();

    let (status, body) = read_json(app.oneshot(get("/health")).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

/// 匿名ユーザーでも検索が 200 を返すことを確認する
#[tokio::test]
async fn anonymous_search_returns_first_page() {
    let harness = TestHarness::new();
    harness.gateway.push_ok(support::results(1, 10));
    let app = harness.router();

    let (status, body) =
        read_json(app.oneshot(get("/api/v1/discovery/search")).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["has_more"], true);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(10));

    let request = harness.gateway.last_call().unwrap();
    assert_eq!(request.current_user_id, None);
    assert_eq!(request.passion_ids, None);
}

#[tokio::test]
async fn search_query_parameters_reach_the_backend() {
    let harness = TestHarness::new();
    let app = harness.router();

    let uri = "/api/v1/discovery/search?q=rust&location=Porto&min_age=20&max_age=40\
               &language=English&gender=Non-binary&passions=Coding,%20Skydiving&page=2";
    let (status, body) = read_json(app.oneshot(get(uri)).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["page"], 2);
    assert_eq!(body["has_more"], false);

    let request = harness.gateway.last_call().unwrap();
    assert_eq!(request.query.as_deref(), Some("rust"));
    assert_eq!(request.location.as_deref(), Some("Porto"));
    assert_eq!((request.min_age, request.max_age), (Some(20), Some(40)));
    assert_eq!(request.language.as_deref(), Some("English"));
    assert_eq!(request.gender.map(|g| g.as_str()), Some("Non-binary"));
    assert_eq!(request.passion_ids, Some(vec![PassionId(1)]));
    assert_eq!(request.offset, 10);
}

/// 空欄のまま送信されたフォーム値は「フィルタなし」として扱われることを確認する
#[tokio::test]
async fn blank_query_values_mean_no_filter() {
    let harness = TestHarness::new();
    let app = harness.router();

    let uri = "/api/v1/discovery/search?q=&location=&min_age=&max_age=&language=&gender=&passions=";
    let (status, body) = read_json(app.oneshot(get(uri)).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let request = harness.gateway.last_call().unwrap();
    assert_eq!(request.query, None);
    assert_eq!(request.location, None);
    assert_eq!((request.min_age, request.max_age), (None, None));
    assert_eq!(request.language, None);
    assert_eq!(request.gender, None);
    assert_eq!(request.passion_ids, None);
}

#[tokio::test]
async fn unknown_gender_is_a_bad_request() {
    let harness = TestHarness::new();
    let app = harness.router();

    let response = app
        .oneshot(get("/api/v1/discovery/search?gender=Robot"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.gateway.call_count(), 0);
}

#[tokio::test]
async fn page_zero_is_a_bad_request() {
    let harness = TestHarness::new();
    let app = harness.router();

    let (status, body) = read_json(
        app.oneshot(get("/api/v1/discovery/search?page=0"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(harness.gateway.call_count(), 0);
}

#[tokio::test]
async fn signed_in_search_forwards_viewer_and_masks_private_profiles() {
    let harness = TestHarness::new();
    harness.gateway.push_ok(vec![
        SearchResultBuilder::new(1).build(),
        SearchResultBuilder::new(2).private().build(),
    ]);
    let app = harness.router();

    let (status, body) = read_json(
        app.oneshot(authed("GET", "/api/v1/discovery/search", &valid_token(), None))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["variant"], "public");
    assert_eq!(body["items"][1]["variant"], "private");
    assert_eq!(body["items"][1]["marker"], "Private Profile");
    assert!(body["items"][1].get("age").is_none());
    assert_eq!(
        harness.gateway.last_call().unwrap().current_user_id,
        Some(support::viewer_id())
    );
}

/// 無効・期限切れトークンで 401 Unauthorized を返すことを確認する
#[tokio::test]
async fn bad_or_expired_tokens_are_rejected() {
    let harness = TestHarness::new();
    let expired = support::bearer_token(support::viewer_id(), Duration::minutes(-5));

    for token in ["bad-token", expired.as_str()] {
        let resp = harness
            .router()
            .oneshot(authed("GET", "/api/v1/discovery/search", token, None))
            .await
            .unwrap();
        let (status, body) = read_json(resp).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "token {token}");
        assert_eq!(body["error"], "Unauthorized");
    }
    assert_eq!(harness.gateway.call_count(), 0);
}

#[tokio::test]
async fn saved_search_routes_require_a_token() {
    let app = TestHarness::new().router();

    let list = app
        .clone()
        .oneshot(get("/api/v1/saved-searches"))
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/v1/saved-searches/1")
        .body(Body::empty())
        .unwrap();
    assert_eq!(
        app.oneshot(delete).await.unwrap().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn saved_search_lifecycle() {
    let harness = TestHarness::with_saved(InMemorySavedSearchRepo::new());
    let token = valid_token();

    let create = authed(
        "POST",
        "/api/v1/saved-searches",
        &token,
        Some(json!({
            "name": "Hikers in Porto",
            "criteria": {
                "location": "Porto",
                "passion_names": ["Hiking", "Unknown"]
            }
        })),
    );
    let (status, created) = read_json(harness.router().oneshot(create).await.unwrap()).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["name"], "Hikers in Porto");
    assert_eq!(created["location"], "Porto");
    assert_eq!(created["query"], Value::Null);
    assert_eq!(created["passion_ids"], json!([2]));
    let id = created["id"].as_i64().unwrap();

    let (status, listed) = read_json(
        harness
            .router()
            .oneshot(authed("GET", "/api/v1/saved-searches", &token, None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let uri = format!("/api/v1/saved-searches/{id}");
    let (status, deleted) = read_json(
        harness
            .router()
            .oneshot(authed("DELETE", &uri, &token, None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "deleted");
    assert!(harness.saved.items().is_empty());

    // already gone: still fine
    let again = harness
        .router()
        .oneshot(authed("DELETE", &uri, &token, None))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::OK);
}

#[tokio::test]
async fn blank_saved_search_name_is_rejected() {
    let harness = TestHarness::new();

    let resp = harness
        .router()
        .oneshot(authed(
            "POST",
            "/api/v1/saved-searches",
            &valid_token(),
            Some(json!({ "name": "   " })),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.saved.inserts(), 0);
}

#[tokio::test]
async fn passions_endpoint_lists_catalog() {
    let app = TestHarness::new().router();

    let (status, body) = read_json(app.oneshot(get("/api/v1/passions")).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Coding" },
            { "id": 2, "name": "Hiking" },
            { "id": 5, "name": "Chess" }
        ])
    );
}

#[tokio::test]
async fn openapi_document_supports_conditional_get() {
    let app = TestHarness::new().router();

    let first = app.clone().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let etag = first
        .headers()
        .get(ETAG)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("etag header");
    let (_, doc) = read_json(first).await;
    assert!(doc["paths"].get("/api/v1/discovery/search").is_some());

    let conditional = Request::builder()
        .method("GET")
        .uri("/openapi.json")
        .header(IF_NONE_MATCH, etag)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(conditional).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
}
