//! Predict Handler
//!
//! The body is taken as raw bytes rather than through the `Json` extractor
//! so the pipeline-availability check runs before any parsing: a degraded
//! server answers 500 for every body shape, malformed JSON included.

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::application::{ServiceError, TelemetryEvent};
use crate::infrastructure::http::dto::PredictResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    state
        .telemetry
        .emit(TelemetryEvent::info("predict request received"));

    state.inference.ensure_available()?;

    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ServiceError::inference(e.to_string()))?;
    let text = value
        .get("text")
        .ok_or(ServiceError::MissingField("text"))?
        .as_str()
        .ok_or_else(|| ServiceError::inference("'text' field must be a string"))?;

    let predictions = state.inference.predict_text(text).await?;

    Ok(Json(PredictResponse { predictions }))
}
