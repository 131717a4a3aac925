// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router tests for the server binary.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{AppState, build_router, create_app_state};
use artsfest_console::ConsoleConfig;
use artsfest_persistence::Persistence;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create test app state with in-memory persistence.
pub async fn create_test_app() -> (Router, AppState) {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let (app_state, _report) = create_app_state(persistence, ConsoleConfig::default()).await;
    (build_router(app_state.clone()), app_state)
}

pub async fn post_json<T: Serialize>(app: &Router, uri: &str, body: &T) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn get_state(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/state")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    body_json(response).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
