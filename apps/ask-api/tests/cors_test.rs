mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, build_test_app, unused_client, MockGenerationClient};

const FRONTEND: &str = "http://localhost:3000";

fn health_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::HOST, "127.0.0.1:8000")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

fn preflight_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .header(header::HOST, "127.0.0.1:8000")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_allowed_origin_gets_cors_headers() {
    let app = build_test_app(unused_client(), &[FRONTEND]);

    let response = app.oneshot(health_from(FRONTEND)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        FRONTEND
    );
}

#[tokio::test]
async fn test_disallowed_origin_is_rejected() {
    let app = build_test_app(unused_client(), &[FRONTEND]);

    let response = app.oneshot(health_from("https://evil.example")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    assert_eq!(body_json(response).await, json!({ "error": "Origin not allowed" }));
}

#[tokio::test]
async fn test_disallowed_origin_never_reaches_model() {
    let app = build_test_app(unused_client(), &[FRONTEND]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/ask")
                .header(header::HOST, "127.0.0.1:8000")
                .header(header::ORIGIN, "https://evil.example")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_empty_allow_list_rejects_cross_origin() {
    let app = build_test_app(unused_client(), &[]);

    let response = app.oneshot(health_from(FRONTEND)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_same_origin_passes_with_empty_allow_list() {
    let app = build_test_app(unused_client(), &[]);

    let response = app.oneshot(health_from("http://127.0.0.1:8000")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_without_origin_passes() {
    let app = build_test_app(unused_client(), &[]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_allowed_preflight_is_answered() {
    let app = build_test_app(unused_client(), &[FRONTEND]);

    let response = app.oneshot(preflight_from(FRONTEND)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), FRONTEND);
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_disallowed_preflight_is_rejected() {
    let app = build_test_app(unused_client(), &[FRONTEND]);

    let response = app.oneshot(preflight_from("https://evil.example")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_wildcard_allows_any_origin() {
    let mut client = MockGenerationClient::new();
    client
        .expect_generate()
        .times(1)
        .returning(|_, _| Ok(Some("fine".to_string())));
    let app = build_test_app(client, &["*"]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/ask")
                .header(header::ORIGIN, "https://anywhere.example")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_docs_have_no_origin_restriction() {
    let app = build_test_app(unused_client(), &[]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-doc/openapi.json")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
