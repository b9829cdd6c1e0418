//! Telemetry Sink Port - leveled structured event forwarding
//!
//! Abstraction over the external observability backend. Events carry a
//! level, a message and a `custom_dimensions` map, mirroring what the
//! backend ingests. Emission is best-effort: a sink fault must never
//! surface as a request failure, so `emit` is infallible by contract.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Event severity understood by the telemetry backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryLevel {
    Info,
    Warning,
    Error,
}

/// A single leveled event forwarded to the telemetry backend.
#[derive(Debug, Clone)]
pub struct TelemetryEvent {
    pub id: Uuid,
    pub level: TelemetryLevel,
    pub message: String,
    /// String-keyed structured metadata; values stay opaque JSON.
    pub custom_dimensions: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl TelemetryEvent {
    pub fn new(level: TelemetryLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            custom_dimensions: Map::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(TelemetryLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(TelemetryLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(TelemetryLevel::Error, message)
    }

    /// Attach one structured dimension.
    pub fn dimension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_dimensions.insert(key.into(), value);
        self
    }
}

/// Telemetry Sink Port
pub trait TelemetrySink: Send + Sync {
    /// Forward one event to the backend. Never fails, never blocks requests.
    fn emit(&self, event: TelemetryEvent);

    /// Push a fixed info event through the sink to verify the wiring.
    fn self_test(&self) {
        self.emit(TelemetryEvent::info("telemetry sink self-test"));
    }
}
