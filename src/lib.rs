//! Moodwire - sentiment classification inference service
//!
//! Hexagonal layout:
//!
//! Domain (domain/):
//! - Label and feedback-verdict value types
//!
//! Application (application/):
//! - Ports: PipelinePort, TelemetrySink, LoadResult
//! - Services: InferenceService, FeedbackService
//!
//! Infrastructure (infrastructure/):
//! - Artifacts: one-shot loader + TF-IDF/logistic pipeline
//! - Telemetry: tracing-backed sink (recording sink for tests)
//! - HTTP: axum server, routes, handlers, middleware

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
