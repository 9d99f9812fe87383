//! Registration API integration tests
//!
//! Tests for `POST /api/users`.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{auth_header, create_test_user, test_keys, test_server, test_server_with, FailingStore};
use crate::{assert_field_errors, assert_msg};
use authgate::backend::auth::UserStore;

#[tokio::test]
async fn test_register_then_login() {
    let (server, store) = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "Ada@Example.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token missing").to_string();

    let stored = store.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(test_keys().verify(&token).unwrap().user.id, stored.id);
    assert_eq!(stored.name, "Ada");
    assert!(stored.password_hash.starts_with("$2"));

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "ada@example.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = auth_header(&token);
    let profile: Value = server.get("/api/auth").add_header(name, value).await.json();
    assert_eq!(profile["email"], "ada@example.com");
}

#[tokio::test]
async fn test_register_validation() {
    let (server, store) = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": " ", "email": "nope", "password": "12345" }))
        .await;
    let errors = assert_field_errors!(response, ["name", "email", "password"]);
    assert_eq!(errors[0]["msg"], "Name is required");
    assert_eq!(errors[2]["msg"], "Please enter a password with 6 or more characters");

    assert!(store.is_empty().await);
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_register_non_string_fields() {
    let (server, store) = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": ["Ada"], "email": true, "password": 1234567 }))
        .await;
    let errors = assert_field_errors!(response, ["name", "email", "password"]);
    assert_eq!(errors[1]["value"], json!(true));

    assert!(store.is_empty().await);
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (server, store) = test_server();
    create_test_user(&store, "a@b.com", "secret123").await.unwrap();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "A@B.com", "password": "another1" }))
        .await;
    assert_msg!(response, StatusCode::BAD_REQUEST, "User already exists");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_register_store_failure_is_opaque() {
    let server = test_server_with(Arc::new(FailingStore));

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "a@b.com", "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Server Error");
}
