//! Fake pipelines for tests and local runs
//!
//! Stand-ins for a real artifact: one returns a fixed label and records
//! what it was asked, the other fails every invocation with a fixed
//! message.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{PipelineError, PipelinePort};
use crate::domain::Label;

/// Pipeline returning the same label for every input.
pub struct FixedPipeline {
    label: Label,
    seen: Mutex<Vec<Vec<String>>>,
}

impl FixedPipeline {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every batch this pipeline has been invoked with, in order.
    pub fn seen_batches(&self) -> Vec<Vec<String>> {
        self.seen.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl PipelinePort for FixedPipeline {
    async fn predict(&self, texts: &[String]) -> Result<Vec<Label>, PipelineError> {
        tracing::debug!(batch_len = texts.len(), "FixedPipeline invoked");
        self.seen.lock().unwrap().push(texts.to_vec());
        Ok(texts.iter().map(|_| self.label).collect())
    }
}

/// Pipeline failing every invocation with a fixed message.
pub struct FailingPipeline {
    message: String,
}

impl FailingPipeline {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl PipelinePort for FailingPipeline {
    async fn predict(&self, _texts: &[String]) -> Result<Vec<Label>, PipelineError> {
        Err(PipelineError::InferenceFailed(self.message.clone()))
    }
}
