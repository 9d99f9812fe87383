/*!
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * - Validation: `400 { "errors": [ { "value", "msg", "param", "location" } ] }`
 * - Authentication: `400`/`401 { "msg": "..." }`
 * - Infrastructure: `500` with the plain-text body `Server Error`
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::{BackendError, SERVER_ERROR_BODY};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
            return (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response();
        }

        let status = self.status_code();
        if let Some(fields) = self.field_errors() {
            return (status, Json(json!({ "errors": fields }))).into_response();
        }

        (status, Json(json!({ "msg": self.message() }))).into_response()
    }
}
