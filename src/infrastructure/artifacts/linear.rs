//! TF-IDF + logistic-regression pipeline
//!
//! Native implementation of the fitted vectorizer + classifier bundle.
//! The artifact is a JSON document holding the fitted vocabulary, per-term
//! IDF weights and the binary logistic-regression parameters; scoring is
//! an l2-normalised tf-idf dot product against the coefficient vector.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::application::ports::{PipelineError, PipelinePort};
use crate::domain::Label;

/// Artifact load/validation error.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent artifact: {0}")]
    Inconsistent(String),
}

fn default_lowercase() -> bool {
    true
}

/// On-disk artifact layout.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearPipelineArtifact {
    /// Term -> feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Per-feature IDF weight, indexed by feature index.
    pub idf: Vec<f64>,
    /// Logistic-regression coefficient per feature.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Class labels, negative side first: `classes[0]` for score <= 0,
    /// `classes[1]` for score > 0.
    pub classes: Vec<i64>,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

/// Loaded pipeline. Immutable after construction; `predict` is pure.
pub struct TfidfLinearPipeline {
    artifact: LinearPipelineArtifact,
}

impl TfidfLinearPipeline {
    /// Validate dimensional consistency and build the pipeline.
    pub fn from_artifact(artifact: LinearPipelineArtifact) -> Result<Self, ArtifactError> {
        let n = artifact.vocabulary.len();
        if artifact.idf.len() != n {
            return Err(ArtifactError::Inconsistent(format!(
                "vocabulary has {} terms but idf has {} weights",
                n,
                artifact.idf.len()
            )));
        }
        if artifact.coefficients.len() != n {
            return Err(ArtifactError::Inconsistent(format!(
                "vocabulary has {} terms but classifier has {} coefficients",
                n,
                artifact.coefficients.len()
            )));
        }
        if artifact.classes.len() != 2 {
            return Err(ArtifactError::Inconsistent(format!(
                "expected 2 classes, artifact has {}",
                artifact.classes.len()
            )));
        }
        if let Some(&bad) = artifact.vocabulary.values().find(|&&idx| idx >= n) {
            return Err(ArtifactError::Inconsistent(format!(
                "vocabulary index {bad} out of range for {n} features"
            )));
        }
        Ok(Self { artifact })
    }

    pub fn feature_count(&self) -> usize {
        self.artifact.vocabulary.len()
    }

    /// Word tokens of at least two alphanumeric characters, matching the
    /// vectorizer the artifact was fitted with.
    fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|token| token.chars().count() >= 2)
            .collect()
    }

    /// Decision-function value for one text.
    fn score(&self, text: &str) -> f64 {
        let owned;
        let text = if self.artifact.lowercase {
            owned = text.to_lowercase();
            owned.as_str()
        } else {
            text
        };

        // Sparse term frequencies over the fitted vocabulary.
        let mut tf: HashMap<usize, f64> = HashMap::new();
        for token in self.tokenize(text) {
            if let Some(&idx) = self.artifact.vocabulary.get(token) {
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        // tf-idf with l2 normalisation.
        let mut norm = 0.0;
        for (&idx, weight) in tf.iter_mut() {
            *weight *= self.artifact.idf[idx];
            norm += *weight * *weight;
        }
        let norm = norm.sqrt();

        let mut score = self.artifact.intercept;
        if norm > 0.0 {
            for (&idx, &weight) in tf.iter() {
                score += self.artifact.coefficients[idx] * (weight / norm);
            }
        }
        score
    }

    fn classify(&self, text: &str) -> Label {
        let side = usize::from(self.score(text) > 0.0);
        Label(self.artifact.classes[side])
    }
}

#[async_trait]
impl PipelinePort for TfidfLinearPipeline {
    async fn predict(&self, texts: &[String]) -> Result<Vec<Label>, PipelineError> {
        if texts.is_empty() {
            return Err(PipelineError::InvalidInput("empty batch".to_string()));
        }
        Ok(texts.iter().map(|text| self.classify(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> LinearPipelineArtifact {
        // Two-term vocabulary: "heureux" pulls positive, "triste" negative.
        LinearPipelineArtifact {
            vocabulary: HashMap::from([("heureux".to_string(), 0), ("triste".to_string(), 1)]),
            idf: vec![1.2, 1.4],
            coefficients: vec![2.5, -3.0],
            intercept: -0.1,
            classes: vec![0, 1],
            lowercase: true,
        }
    }

    #[tokio::test]
    async fn positive_text_scores_positive_class() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        let labels = pipeline
            .predict(&["Je suis tellement heureux aujourd'hui!".to_string()])
            .await
            .unwrap();
        assert_eq!(labels, vec![Label(1)]);
    }

    #[tokio::test]
    async fn negative_text_scores_negative_class() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        let labels = pipeline
            .predict(&["Je suis très triste et déçu.".to_string()])
            .await
            .unwrap();
        assert_eq!(labels, vec![Label(0)]);
    }

    #[tokio::test]
    async fn unknown_vocabulary_falls_back_to_intercept_side() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        // No known term: score is the (negative) intercept alone.
        let labels = pipeline.predict(&["xyzzy".to_string()]).await.unwrap();
        assert_eq!(labels, vec![Label(0)]);
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        let labels = pipeline
            .predict(&["si heureux".to_string(), "si triste".to_string()])
            .await
            .unwrap();
        assert_eq!(labels, vec![Label(1), Label(0)]);
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        assert!(pipeline.predict(&[]).await.is_err());
    }

    #[test]
    fn mismatched_idf_length_is_inconsistent() {
        let mut a = artifact();
        a.idf.push(1.0);
        assert!(matches!(
            TfidfLinearPipeline::from_artifact(a),
            Err(ArtifactError::Inconsistent(_))
        ));
    }

    #[test]
    fn non_binary_classes_are_inconsistent() {
        let mut a = artifact();
        a.classes = vec![0, 1, 2];
        assert!(TfidfLinearPipeline::from_artifact(a).is_err());
    }

    #[test]
    fn out_of_range_vocabulary_index_is_inconsistent() {
        let mut a = artifact();
        a.vocabulary.insert("bizarre".to_string(), 7);
        a.idf.push(1.0);
        a.coefficients.push(0.5);
        assert!(TfidfLinearPipeline::from_artifact(a).is_err());
    }

    #[test]
    fn tokenizer_drops_single_character_tokens() {
        let pipeline = TfidfLinearPipeline::from_artifact(artifact()).unwrap();
        assert_eq!(pipeline.tokenize("a b heureux, c'est"), vec!["heureux", "est"]);
    }
}
