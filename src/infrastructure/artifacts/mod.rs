//! Artifact Layer
//!
//! Loading and concrete implementations of the classification pipeline.

pub mod fake;
pub mod linear;
pub mod loader;

pub use fake::{FailingPipeline, FixedPipeline};
pub use linear::{ArtifactError, LinearPipelineArtifact, TfidfLinearPipeline};
pub use loader::load_artifacts;
