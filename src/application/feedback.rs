//! Feedback Service
//!
//! Classifies user correctness signals about prior predictions and
//! forwards them to the telemetry sink. Stateless; nothing is persisted.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::application::ports::{TelemetryEvent, TelemetrySink};
use crate::domain::FeedbackKind;

/// One feedback submission, already validated for key presence.
#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub text: String,
    /// The prediction the caller is judging; kept opaque end to end.
    pub prediction: Value,
    /// Raw verdict string from the wire.
    pub verdict: String,
}

/// Feedback service
pub struct FeedbackService {
    telemetry: Arc<dyn TelemetrySink>,
}

impl FeedbackService {
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry }
    }

    /// Forward one feedback record to telemetry.
    ///
    /// Rejected predictions become warning events, validated ones info
    /// events, both with `{tweet, prediction}` dimensions. An unrecognized
    /// verdict emits nothing; the submission is still acknowledged.
    pub fn record(&self, record: FeedbackRecord) {
        let event = match FeedbackKind::parse(&record.verdict) {
            Some(FeedbackKind::Rejected) => TelemetryEvent::warning("incorrect prediction"),
            Some(FeedbackKind::Validated) => TelemetryEvent::info("prediction validated"),
            None => return,
        };

        self.telemetry.emit(
            event
                .dimension("tweet", json!(record.text))
                .dimension("prediction", record.prediction),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TelemetryLevel;
    use crate::infrastructure::telemetry::RecordingTelemetrySink;

    fn service() -> (FeedbackService, Arc<RecordingTelemetrySink>) {
        let sink = Arc::new(RecordingTelemetrySink::new());
        (FeedbackService::new(sink.clone()), sink)
    }

    fn record(verdict: &str) -> FeedbackRecord {
        FeedbackRecord {
            text: "Ceci est un texte".to_string(),
            prediction: json!("positif"),
            verdict: verdict.to_string(),
        }
    }

    #[test]
    fn rejected_feedback_emits_warning_with_dimensions() {
        let (service, sink) = service();
        service.record(record("non_valide"));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, TelemetryLevel::Warning);
        assert_eq!(events[0].message, "incorrect prediction");
        assert_eq!(events[0].custom_dimensions["tweet"], json!("Ceci est un texte"));
        assert_eq!(events[0].custom_dimensions["prediction"], json!("positif"));
    }

    #[test]
    fn validated_feedback_emits_info() {
        let (service, sink) = service();
        service.record(record("valide"));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, TelemetryLevel::Info);
        assert_eq!(events[0].message, "prediction validated");
    }

    #[test]
    fn unknown_verdict_emits_nothing() {
        let (service, sink) = service();
        service.record(record("peut_etre"));
        assert!(sink.events().is_empty());
    }
}
