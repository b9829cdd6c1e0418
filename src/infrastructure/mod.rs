//! Infrastructure Layer
//!
//! Concrete implementations of the application ports.

pub mod artifacts;
pub mod http;
pub mod telemetry;

pub use artifacts::load_artifacts;
pub use telemetry::TracingTelemetrySink;
