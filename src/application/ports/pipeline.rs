//! Pipeline Port - classification pipeline abstraction
//!
//! Abstract interface over the fitted vectorizer + classifier bundle.
//! Concrete implementations live in infrastructure/artifacts.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Label;

/// Pipeline invocation error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

/// Pipeline Port
///
/// A loaded pipeline is immutable and shared read-only across all in-flight
/// requests; `predict` takes `&self` and must be safe to call concurrently.
#[async_trait]
pub trait PipelinePort: Send + Sync {
    /// Classify a batch of texts, one label per input, in input order.
    async fn predict(&self, texts: &[String]) -> Result<Vec<Label>, PipelineError>;
}

/// Outcome of the one-shot artifact load at process start.
///
/// Computed exactly once before the listener binds and held read-only for
/// the process lifetime. A `Failed` load never aborts startup; the server
/// runs degraded and refuses predictions until restart.
pub enum LoadResult {
    Loaded(Arc<dyn PipelinePort>),
    Failed(String),
}

impl LoadResult {
    /// The loaded pipeline, if any.
    pub fn pipeline(&self) -> Option<&Arc<dyn PipelinePort>> {
        match self {
            LoadResult::Loaded(pipeline) => Some(pipeline),
            LoadResult::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadResult::Loaded(_))
    }
}

impl std::fmt::Debug for LoadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadResult::Loaded(_) => f.write_str("LoadResult::Loaded(..)"),
            LoadResult::Failed(reason) => write!(f, "LoadResult::Failed({reason:?})"),
        }
    }
}
