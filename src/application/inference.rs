//! Inference Service
//!
//! Wraps the one-shot load result and the telemetry sink behind the two
//! operations the HTTP layer needs: an availability check and a
//! single-text prediction. The pipeline reference is read-only shared
//! state; nothing here mutates after construction.

use std::sync::Arc;

use serde_json::json;

use crate::application::error::ServiceError;
use crate::application::ports::{LoadResult, TelemetryEvent, TelemetrySink};
use crate::domain::Label;

/// Inference service
pub struct InferenceService {
    load_result: Arc<LoadResult>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl InferenceService {
    pub fn new(load_result: Arc<LoadResult>, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            load_result,
            telemetry,
        }
    }

    /// Refuse early when the artifact never loaded.
    ///
    /// Called before the request body is even parsed, so a degraded server
    /// answers the same way for every body shape. Emits an error-level
    /// event carrying the load failure reason.
    pub fn ensure_available(&self) -> Result<(), ServiceError> {
        match self.load_result.as_ref() {
            LoadResult::Loaded(_) => Ok(()),
            LoadResult::Failed(reason) => {
                self.telemetry.emit(
                    TelemetryEvent::error("pipeline not loaded")
                        .dimension("reason", json!(reason)),
                );
                Err(ServiceError::PipelineUnavailable)
            }
        }
    }

    /// Classify one text. The input is always wrapped in a single-element
    /// batch; the pipeline never sees a raw scalar.
    pub async fn predict_text(&self, text: &str) -> Result<Vec<Label>, ServiceError> {
        let pipeline = self
            .load_result
            .pipeline()
            .ok_or(ServiceError::PipelineUnavailable)?;

        let batch = [text.to_string()];
        match pipeline.predict(&batch).await {
            Ok(labels) => {
                self.telemetry.emit(
                    TelemetryEvent::info("predictions computed")
                        .dimension("predictions", json!(labels)),
                );
                Ok(labels)
            }
            Err(e) => {
                self.telemetry.emit(
                    TelemetryEvent::error("prediction failed")
                        .dimension("error", json!(e.to_string())),
                );
                Err(ServiceError::inference(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TelemetryLevel;
    use crate::infrastructure::artifacts::{FailingPipeline, FixedPipeline};
    use crate::infrastructure::telemetry::RecordingTelemetrySink;

    fn service_with(load_result: LoadResult) -> (InferenceService, Arc<RecordingTelemetrySink>) {
        let sink = Arc::new(RecordingTelemetrySink::new());
        let service = InferenceService::new(Arc::new(load_result), sink.clone());
        (service, sink)
    }

    #[tokio::test]
    async fn failed_load_refuses_before_prediction() {
        let (service, sink) = service_with(LoadResult::Failed("no artifact".into()));
        let err = service.ensure_available().unwrap_err();
        assert!(matches!(err, ServiceError::PipelineUnavailable));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, TelemetryLevel::Error);
    }

    #[tokio::test]
    async fn predict_wraps_input_in_single_element_batch() {
        let pipeline = Arc::new(FixedPipeline::new(Label(1)));
        let (service, _) = service_with(LoadResult::Loaded(pipeline.clone()));

        let labels = service.predict_text("bonjour").await.unwrap();
        assert_eq!(labels, vec![Label(1)]);
        assert_eq!(pipeline.seen_batches(), vec![vec!["bonjour".to_string()]]);
    }

    #[tokio::test]
    async fn pipeline_failure_surfaces_raw_message() {
        let pipeline = Arc::new(FailingPipeline::new("tensor shape mismatch"));
        let (service, sink) = service_with(LoadResult::Loaded(pipeline));

        let err = service.predict_text("x").await.unwrap_err();
        assert_eq!(err.to_string(), "inference failed: tensor shape mismatch");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, TelemetryLevel::Error);
    }
}
