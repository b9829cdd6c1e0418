//! Telemetry Layer

pub mod sink;

pub use sink::{RecordingTelemetrySink, TracingTelemetrySink};
