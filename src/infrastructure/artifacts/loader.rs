//! Artifact Loader
//!
//! One-shot load of the serialized pipeline at process start. Failure is
//! absorbed into `LoadResult::Failed` so the server still starts and
//! reports a degraded state instead of crashing; there is no retry and no
//! reload for the process lifetime.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::LoadResult;

use super::linear::{ArtifactError, LinearPipelineArtifact, TfidfLinearPipeline};

fn try_load(path: &Path) -> Result<TfidfLinearPipeline, ArtifactError> {
    let file = File::open(path)?;
    let artifact: LinearPipelineArtifact = serde_json::from_reader(BufReader::new(file))?;
    TfidfLinearPipeline::from_artifact(artifact)
}

/// Load the pipeline artifact. Exactly one attempt; any failure (missing
/// file, corrupt JSON, inconsistent dimensions) becomes `Failed(reason)`.
pub fn load_artifacts(path: &Path) -> LoadResult {
    tracing::info!(path = %path.display(), "loading classification pipeline artifact");
    match try_load(path) {
        Ok(pipeline) => {
            tracing::info!(
                path = %path.display(),
                features = pipeline.feature_count(),
                "pipeline loaded"
            );
            LoadResult::Loaded(Arc::new(pipeline))
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load pipeline artifact");
            LoadResult::Failed(e.to_string())
        }
    }
}
