// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use listing_slugs::application::services::ApplicationServices;
use listing_slugs::domain::listing::{ListingSlugRepository, SlugPolicy};
use listing_slugs::infrastructure::util::DefaultSlugGenerator;
use listing_slugs::presentation::http::routes::{RouterOptions, build_router};
use listing_slugs::presentation::http::state::HttpState;
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_test_services(
    repo: Arc<dyn ListingSlugRepository>,
    policy: SlugPolicy,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repo,
        Arc::new(DefaultSlugGenerator),
        policy,
    ))
}

pub fn make_test_router(repo: Arc<dyn ListingSlugRepository>) -> axum::Router {
    make_test_router_with_policy(repo, SlugPolicy::default())
}

pub fn make_test_router_with_policy(
    repo: Arc<dyn ListingSlugRepository>,
    policy: SlugPolicy,
) -> axum::Router {
    let state = HttpState {
        services: build_test_services(repo, policy),
    };
    build_router(state, &RouterOptions::default())
}

/// `/api/listings/slug` with a properly encoded query string.
pub fn slug_uri(params: &[(&str, &str)]) -> String {
    let query = serde_urlencoded::to_string(params).expect("encode query");
    if query.is_empty() {
        "/api/listings/slug".to_string()
    } else {
        format!("/api/listings/slug?{query}")
    }
}

/// Issue a GET and return the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert an `ErrorResponse` body with the expected status and kind.
pub async fn assert_error_kind(
    app: axum::Router,
    uri: &str,
    expected_status: StatusCode,
    expected_kind: &str,
) {
    let (status, json) = get_json(app, uri).await;
    assert_eq!(status, expected_status, "body: {json}");
    assert_eq!(
        json.get("kind").and_then(Value::as_str),
        Some(expected_kind),
        "body: {json}"
    );
    let msg = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(!msg.is_empty(), "expected non-empty message field in ErrorResponse");
}
