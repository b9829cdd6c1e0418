//! Telemetry Sink Implementations
//!
//! `TracingTelemetrySink` forwards leveled events to the `tracing`
//! backend; subscribers configured in main decide where they land.
//! `RecordingTelemetrySink` buffers events so tests can assert on them.

use std::sync::Mutex;

use crate::application::ports::{TelemetryEvent, TelemetryLevel, TelemetrySink};

/// Sink forwarding events to the process-wide `tracing` subscriber.
pub struct TracingTelemetrySink;

impl TracingTelemetrySink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingTelemetrySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySink for TracingTelemetrySink {
    fn emit(&self, event: TelemetryEvent) {
        let dimensions = serde_json::Value::Object(event.custom_dimensions).to_string();
        match event.level {
            TelemetryLevel::Info => tracing::info!(
                event_id = %event.id,
                custom_dimensions = %dimensions,
                "{}",
                event.message
            ),
            TelemetryLevel::Warning => tracing::warn!(
                event_id = %event.id,
                custom_dimensions = %dimensions,
                "{}",
                event.message
            ),
            TelemetryLevel::Error => tracing::error!(
                event_id = %event.id,
                custom_dimensions = %dimensions,
                "{}",
                event.message
            ),
        }
    }
}

/// Sink buffering events in memory for assertions.
pub struct RecordingTelemetrySink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingTelemetrySink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Default for RecordingTelemetrySink {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySink for RecordingTelemetrySink {
    fn emit(&self, event: TelemetryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recording_sink_keeps_emission_order() {
        let sink = RecordingTelemetrySink::new();
        sink.emit(TelemetryEvent::info("first"));
        sink.emit(TelemetryEvent::warning("second").dimension("k", json!("v")));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].level, TelemetryLevel::Warning);
        assert_eq!(events[1].custom_dimensions["k"], json!("v"));
    }

    #[test]
    fn self_test_pushes_one_info_event() {
        let sink = RecordingTelemetrySink::new();
        sink.self_test();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, TelemetryLevel::Info);
    }
}
