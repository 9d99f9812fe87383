//! Authentication API integration tests
//!
//! Tests for `POST /api/auth` (login) and `GET /api/auth` (current user).

use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    auth_header, bearer_header, create_test_user, test_keys, test_server, test_server_with,
    FailingStore,
};
use crate::{assert_field_errors, assert_msg};
use authgate::backend::auth::{SessionKeys, TOKEN_TTL_SECS};

#[tokio::test]
async fn test_login_scenario() {
    let (server, store) = test_server();
    let user = create_test_user(&store, "a@b.com", "secret123").await.unwrap();

    // Correct credentials
    let response = server
        .post("/api/auth")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token missing");
    let claims = test_keys().verify(token).unwrap();
    assert_eq!(claims.user.id, user.id);
    assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);

    // Wrong password
    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "a@b.com", "password": "wrong" }))
        .await;
    assert_msg!(response, StatusCode::BAD_REQUEST, "Invalid Password");

    // Unknown email
    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "x@y.com", "password": "secret123" }))
        .await;
    assert_msg!(response, StatusCode::BAD_REQUEST, "Invalid Credentials");

    // Invalid email never reaches the store
    let lookups_before = store.lookup_count();
    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "not-an-email", "password": "secret123" }))
        .await;
    let errors = assert_field_errors!(response, ["email"]);
    assert_eq!(errors[0]["msg"], "Please include a valid email");
    assert_eq!(errors[0]["value"], "not-an-email");
    assert_eq!(store.lookup_count(), lookups_before);
}

#[tokio::test]
async fn test_login_reports_all_invalid_fields() {
    let (server, store) = test_server();

    let response = server.post("/api/auth").json(&json!({})).await;
    assert_field_errors!(response, ["email", "password"]);

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "a@b.com", "password": "" }))
        .await;
    let errors = assert_field_errors!(response, ["password"]);
    assert_eq!(errors[0]["msg"], "Password is required");

    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_login_non_string_email_is_field_error() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": 5, "password": "secret123" }))
        .await;
    let errors = assert_field_errors!(response, ["email"]);
    assert_eq!(errors[0]["msg"], "Please include a valid email");
    assert_eq!(errors[0]["value"], json!(5));

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "a@b.com", "password": 123 }))
        .await;
    assert_field_errors!(response, ["password"]);

    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_login_rejects_padded_email() {
    let (server, store) = test_server();
    create_test_user(&store, "a@b.com", "secret123").await.unwrap();
    let lookups_before = store.lookup_count();

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": " a@b.com ", "password": "secret123" }))
        .await;
    let errors = assert_field_errors!(response, ["email"]);
    assert_eq!(errors[0]["value"], " a@b.com ");
    assert_eq!(store.lookup_count(), lookups_before);
}

#[tokio::test]
async fn test_login_accepts_mixed_case_email() {
    let (server, store) = test_server();
    create_test_user(&store, "a@b.com", "secret123").await.unwrap();

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "A@B.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let (server, store) = test_server();

    let response = server
        .post("/api/auth")
        .text("{ not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["msg"].is_string());
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_login_store_failure_is_opaque() {
    let server = test_server_with(Arc::new(FailingStore));

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "a@b.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Server Error");
}

#[tokio::test]
async fn test_get_me_returns_profile() {
    let (server, store) = test_server();
    let user = create_test_user(&store, "a@b.com", "secret123").await.unwrap();
    let (name, value) = auth_header(&user.token);

    let first: Value = server.get("/api/auth").add_header(name.clone(), value.clone()).await.json();
    let second: Value = server.get("/api/auth").add_header(name, value).await.json();

    assert_eq!(first, second);
    assert_eq!(first["id"], user.id.to_string());
    assert_eq!(first["email"], user.email);
    assert_eq!(first["name"], "Test User");
    assert!(first.get("password").is_none());
    assert!(first.get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_me_accepts_bearer_token() {
    let (server, store) = test_server();
    let user = create_test_user(&store, "a@b.com", "secret123").await.unwrap();
    let (name, value) = bearer_header(&user.token);

    let response = server.get("/api/auth").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
}

#[tokio::test]
async fn test_get_me_unknown_user_is_null() {
    let (server, _store) = test_server();
    let token = test_keys().sign(Uuid::new_v4()).unwrap();
    let (name, value) = auth_header(&token);

    let response = server.get("/api/auth").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_get_me_without_token() {
    let (server, store) = test_server();

    let response = server.get("/api/auth").await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_get_me_rejects_bad_tokens() {
    let (server, store) = test_server();
    let user = create_test_user(&store, "a@b.com", "secret123").await.unwrap();

    let foreign = SessionKeys::new("some-other-secret").sign(user.id).unwrap();
    let expired = test_keys()
        .sign_at(user.id, chrono::Utc::now().timestamp() - TOKEN_TTL_SECS - 3600)
        .unwrap();

    for token in [foreign.as_str(), expired.as_str(), "not.a.token"] {
        let (name, value) = auth_header(token);
        let response = server.get("/api/auth").add_header(name, value).await;
        assert_msg!(response, StatusCode::UNAUTHORIZED, "Token is not valid");
    }
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_get_me_store_failure_is_opaque() {
    let server = test_server_with(Arc::new(FailingStore));
    let token = test_keys().sign(Uuid::new_v4()).unwrap();
    let (name, value) = auth_header(&token);

    let response = server.get("/api/auth").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Server Error");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (server, _store) = test_server();

    let response = server.get("/api/nothing-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
