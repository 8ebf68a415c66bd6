// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - /detect only accepts POST
//! - / only accepts GET
//! - Unknown paths return 404
//! - The CORS layer follows the configuration

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tray_detect::{create_app, AppState, ServerConfig};

use super::support::*;

#[tokio::test]
async fn test_detect_rejects_get() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/detect")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/v1/detect")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_enabled_by_default() {
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_can_be_disabled() {
    let config = ServerConfig {
        disable_cors: true,
        ..Default::default()
    };
    let app = create_app(AppState::new_for_test(), &config);
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
