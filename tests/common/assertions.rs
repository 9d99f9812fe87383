//! Custom assertion macros and utilities
//!
//! Provides assertions for the JSON error bodies returned by the API.

/// Assert a response carries the given status and `{ "msg": ... }` body
#[macro_export]
macro_rules! assert_msg {
    ($response:expr, $status:expr, $msg:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "msg": $msg }));
    }};
}

/// Assert a response is a 400 validation failure naming exactly these
/// fields, in order; returns the error entries
#[macro_export]
macro_rules! assert_field_errors {
    ($response:expr, [$($param:expr),+ $(,)?]) => {{
        let response = $response;
        assert_eq!(response.status_code(), axum::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        let errors = body["errors"]
            .as_array()
            .cloned()
            .unwrap_or_else(|| panic!("Expected an errors array, got: {}", body));
        let params: Vec<&str> = errors
            .iter()
            .map(|e| e["param"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(params, vec![$($param),+]);
        for error in &errors {
            assert_eq!(error["location"], "body");
        }
        errors
    }};
}
