//! Application State
//!
//! Shared state handed to every request handler: the one-shot load result,
//! the telemetry sink and the two services built on top of them.

use std::sync::Arc;

use crate::application::{
    FeedbackService, InferenceService, LoadResult, TelemetrySink,
};

/// Application state
///
/// The load result is computed before the listener binds and never changes
/// afterwards; handlers only ever read it.
pub struct AppState {
    pub load_result: Arc<LoadResult>,
    pub telemetry: Arc<dyn TelemetrySink>,
    pub inference: InferenceService,
    pub feedback: FeedbackService,
}

impl AppState {
    pub fn new(load_result: Arc<LoadResult>, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            inference: InferenceService::new(load_result.clone(), telemetry.clone()),
            feedback: FeedbackService::new(telemetry.clone()),
            load_result,
            telemetry,
        }
    }
}
