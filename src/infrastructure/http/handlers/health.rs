//! Liveness and test endpoints
//!
//! Fixed pass-through responses; no state behind either.

use axum::Json;

use crate::infrastructure::http::dto::TestResponse;

/// Liveness probe - plain text body.
pub async fn home() -> &'static str {
    "service is running"
}

/// Fixed JSON acknowledgment.
pub async fn test_endpoint() -> Json<TestResponse> {
    Json(TestResponse {
        message: "test endpoint OK",
    })
}
