//! Auth guard integration tests
//!
//! Every job/user route must reject unauthenticated requests with 401
//! before any service method runs. These tests use a lazy pool: if a
//! handler or the identity lookup were reached, the request would fail
//! with a connection error instead of the asserted 401.

use axum::http::{Method, StatusCode};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{authed_request, parse_body, unauthed_request, TestApp, TEST_JWT_SECRET};

/// Protected routes, exercised without a body (the guard runs before body
/// extraction, so none is needed)
const PROTECTED_ROUTES: &[(Method, &str)] = &[
    (Method::POST, "/api/v1/create-job"),
    (Method::GET, "/api/v1/get-job"),
    (
        Method::PATCH,
        "/api/v1/update-job/6b1c8b58-0000-4000-8000-000000000000",
    ),
    (
        Method::DELETE,
        "/api/v1/delete-job/6b1c8b58-0000-4000-8000-000000000000",
    ),
    (Method::GET, "/api/v1/job-stats"),
    (Method::PUT, "/api/v1/update-user"),
];

#[tokio::test]
async fn health_check_is_public() {
    let app = TestApp::lazy().unwrap();
    let resp = app
        .router()
        .oneshot(unauthed_request(Method::GET, "/health", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_authorization_header_rejected() {
    let app = TestApp::lazy().unwrap();

    for (method, uri) in PROTECTED_ROUTES {
        let resp = app
            .router()
            .oneshot(unauthed_request(method.clone(), uri, None))
            .await
            .unwrap();
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should reject without Authorization header"
        );

        let body = parse_body(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Authorization header required"));
    }
}

#[tokio::test]
async fn non_bearer_authorization_rejected() {
    let app = TestApp::lazy().unwrap();

    let mut req = unauthed_request(Method::GET, "/api/v1/get-job", None);
    req.headers_mut()
        .insert("authorization", "Basic abc123".parse().unwrap());

    let resp = app.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = parse_body(resp).await;
    assert_eq!(body["message"], json!("Invalid authorization header format"));
}

#[tokio::test]
async fn garbage_token_rejected() {
    let app = TestApp::lazy().unwrap();

    let resp = app
        .router()
        .oneshot(authed_request(
            Method::GET,
            "/api/v1/get-job",
            "not-a-jwt",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = parse_body(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid or expired token"));
}

#[tokio::test]
async fn token_with_wrong_secret_rejected() {
    let app = TestApp::lazy().unwrap();

    let claims = json!({
        "sub": Uuid::new_v4().to_string(),
        "iat": Utc::now().timestamp(),
        "exp": Utc::now().timestamp() + 3600,
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some_other_secret"),
    )
    .unwrap();

    let resp = app
        .router()
        .oneshot(authed_request(Method::GET, "/api/v1/job-stats", &token, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_rejected() {
    let app = TestApp::lazy().unwrap();

    let past = Utc::now().timestamp() - 7200;
    let claims = json!({
        "sub": Uuid::new_v4().to_string(),
        "iat": past,
        "exp": past + 60,
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let resp = app
        .router()
        .oneshot(authed_request(Method::GET, "/api/v1/get-job", &token, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = parse_body(resp).await;
    assert_eq!(body["message"], json!("Invalid or expired token"));
}

#[tokio::test]
async fn token_with_non_uuid_subject_rejected() {
    let app = TestApp::lazy().unwrap();

    let claims = json!({
        "sub": "not-a-uuid",
        "iat": Utc::now().timestamp(),
        "exp": Utc::now().timestamp() + 3600,
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let resp = app
        .router()
        .oneshot(authed_request(Method::GET, "/api/v1/get-job", &token, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = parse_body(resp).await;
    assert_eq!(body["message"], json!("Invalid user ID in token"));
}
