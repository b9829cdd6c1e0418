//! HTTP Routes
//!
//! API Endpoints:
//! - /predict   POST  classify one text with the loaded pipeline
//! - /feedback  POST  forward a prediction-correctness signal to telemetry
//! - /          GET   liveness probe (plain text)
//! - /test      GET   fixed JSON acknowledgment

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// Build the full route table.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/test", get(handlers::test_endpoint))
        .route("/predict", post(handlers::predict))
        .route("/feedback", post(handlers::feedback))
}
