//! Request validation tests for the public routes
//!
//! Register/login are unauthenticated, so their input checks run before
//! any store access and need no database.

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{parse_body, unauthed_request, TestApp};

#[tokio::test]
async fn register_missing_email_rejected() {
    let app = TestApp::lazy().unwrap();

    let resp = app
        .router()
        .oneshot(unauthed_request(
            Method::POST,
            "/api/v1/register",
            Some(json!({ "name": "John", "password": "hunter2secret" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(resp).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn register_malformed_email_rejected() {
    let app = TestApp::lazy().unwrap();

    let resp = app
        .router()
        .oneshot(unauthed_request(
            Method::POST,
            "/api/v1/register",
            Some(json!({
                "name": "John",
                "email": "not-an-email",
                "password": "hunter2secret"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_short_password_rejected() {
    let app = TestApp::lazy().unwrap();

    let resp = app
        .router()
        .oneshot(unauthed_request(
            Method::POST,
            "/api/v1/register",
            Some(json!({
                "name": "John",
                "email": "johndoe@gmail.com",
                "password": "short"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_missing_password_rejected() {
    let app = TestApp::lazy().unwrap();

    let resp = app
        .router()
        .oneshot(unauthed_request(
            Method::POST,
            "/api/v1/login",
            Some(json!({ "email": "johndoe@gmail.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(resp).await;
    assert_eq!(body["success"], json!(false));
}
