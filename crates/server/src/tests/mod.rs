// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]


use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use larder_api::{LoginRequest, LoginResponse, RegisterRequest};
use larder_persistence::Persistence;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

pub const TEST_PASSWORD: &str = "Pancakes42";

/// Builds a router over a fresh in-memory database.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Sends one request, with an optional bearer token and JSON body.
pub async fn send<B: Serialize>(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request: Request<Body> = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Like [`send`] but expects `expected` and decodes the body.
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&B>,
    expected: StatusCode,
) -> T {
    let (status, bytes) = send(app, method, uri, token, body).await;
    assert_eq!(
        status,
        expected,
        "unexpected status for {method} {uri}: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers `username` and returns a live session token.
pub async fn sign_in(app: &Router, username: &str) -> String {
    let register: RegisterRequest = RegisterRequest {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        password_confirmation: TEST_PASSWORD.to_string(),
    };
    let (status, _) = send(app, "POST", "/auth/register", None, Some(&register)).await;
    assert_eq!(status, StatusCode::OK);

    let login: LoginRequest = LoginRequest {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let response: LoginResponse =
        send_json(app, "POST", "/auth/login", None, Some(&login), StatusCode::OK).await;
    response.session_token
}
