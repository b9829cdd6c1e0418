//! Feedback Handler

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{FeedbackRecord, ServiceError};
use crate::infrastructure::http::dto::FeedbackAck;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Text dimension values pass through as-is when they are strings; any
/// other JSON renders to its compact form.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn feedback(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FeedbackAck>, ApiError> {
    // Unparseable bodies and missing keys answer the same fixed 400.
    let value: Value =
        serde_json::from_slice(&body).map_err(|_| ServiceError::InvalidRequest)?;

    let (Some(text), Some(prediction), Some(verdict)) = (
        value.get("text"),
        value.get("prediction"),
        value.get("feedback"),
    ) else {
        return Err(ServiceError::InvalidRequest.into());
    };

    state.feedback.record(FeedbackRecord {
        text: as_text(text),
        prediction: prediction.clone(),
        verdict: verdict.as_str().unwrap_or_default().to_string(),
    });

    Ok(Json(FeedbackAck::received()))
}
