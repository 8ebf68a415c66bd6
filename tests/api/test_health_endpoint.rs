// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};

use super::support::*;

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = send(test_app(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Python API is running!");
}

#[tokio::test]
async fn test_health_check_is_stable() {
    for _ in 0..3 {
        let request = Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = send(test_app(), request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Python API is running!");
    }
}
