//! Data Transfer Objects

use serde::Serialize;

use crate::domain::Label;

/// Successful prediction response: a plain array of scalar class ids,
/// length 1 for a single-text request.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<Label>,
}

/// Acknowledgment for an accepted feedback submission.
#[derive(Debug, Serialize)]
pub struct FeedbackAck {
    pub status: &'static str,
}

impl FeedbackAck {
    pub fn received() -> Self {
        Self {
            status: "feedback received",
        }
    }
}

/// Fixed body of the test endpoint.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: &'static str,
}
