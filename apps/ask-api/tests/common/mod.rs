#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use mockall::mock;
use std::sync::Arc;

use ask_api::config::MiddlewareConfig;
use ask_api::{build_app, AppState};
use ask_lib::ask_service::AskService;
use ask_lib::generation::{GenerationClientTrait, GenerationError};

mock! {
    pub GenerationClient {}

    #[async_trait]
    impl GenerationClientTrait for GenerationClient {
        async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, GenerationError>;
    }
}

pub const MODEL: &str = "gemini-pro";

pub fn middleware_config(origins: &[&str]) -> MiddlewareConfig {
    MiddlewareConfig {
        cors_allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        ..MiddlewareConfig::default()
    }
}

pub fn build_test_app(client: MockGenerationClient, origins: &[&str]) -> Router {
    build_test_app_with_config(Arc::new(client), &middleware_config(origins))
}

pub fn build_test_app_with_config(
    client: Arc<dyn GenerationClientTrait>,
    config: &MiddlewareConfig,
) -> Router {
    let state = AppState {
        ask_service: Arc::new(AskService::with_client(client, MODEL)),
        env: "test".to_string(),
    };
    build_app(state, config)
}

/// A client that must never be reached.
pub fn unused_client() -> MockGenerationClient {
    let mut client = MockGenerationClient::new();
    client.expect_generate().times(0);
    client
}

pub fn ask_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
