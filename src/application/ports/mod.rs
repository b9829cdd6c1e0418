//! Application Ports
//!
//! Abstract interfaces the application layer depends on; concrete
//! implementations live in the infrastructure layer.

mod pipeline;
mod telemetry;

pub use pipeline::{LoadResult, PipelineError, PipelinePort};
pub use telemetry::{TelemetryEvent, TelemetryLevel, TelemetrySink};
