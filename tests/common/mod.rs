//! Shared test utilities for integration tests.
//!
//! This module provides a `TestClient` that drives the router directly with
//! `oneshot` requests. Methods are intentionally broad to support various test
//! scenarios across different test files.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use customer_insights::config::Config;
use customer_insights::handlers;
use customer_insights::models::Language;
use customer_insights::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A test client holding application state across sequential requests.
pub struct TestClient {
    pub state: AppState,
}

impl TestClient {
    /// Create a new test client with default configuration (Chinese UI, no conversion).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new test client defaulting to the given language.
    pub fn with_language(language: Language) -> Self {
        Self::with_config(Config {
            default_language: language,
            ..Config::default()
        })
    }

    /// Create a new test client with a specific configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn router(&self) -> Router {
        handlers::routes().with_state(self.state.clone())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a POST request with a raw JSON body and return status and body.
    pub async fn post_json_raw(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let response = self
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body_bytes).to_string())
    }

    /// POST a JSON value and parse the response.
    pub async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.post_json_raw(uri, &body.to_string()).await;
        let parsed = serde_json::from_str(&body).ok();
        (status, parsed)
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        uri: &str,
    ) -> (StatusCode, Option<T>) {
        let (status, body) = self.get(uri).await;
        let parsed = serde_json::from_str(&body).ok();
        (status, parsed)
    }
}
