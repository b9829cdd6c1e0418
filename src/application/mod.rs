//! Application Layer
//!
//! Ports, services and the application error type. Services hold Arc'd
//! ports and expose the operations the HTTP layer drives.

pub mod error;
pub mod feedback;
pub mod inference;
pub mod ports;

pub use error::ServiceError;
pub use feedback::{FeedbackRecord, FeedbackService};
pub use inference::InferenceService;
pub use ports::{
    LoadResult, PipelineError, PipelinePort, TelemetryEvent, TelemetryLevel, TelemetrySink,
};
