//! Domain types
//!
//! Small typed values shared across the application and infrastructure
//! layers: the class label emitted by the pipeline and the feedback verdict.

use serde::{Deserialize, Serialize};

/// Class label produced by the classification pipeline.
///
/// Serializes as a bare integer so responses carry plain scalars
/// (`{"predictions": [1]}`), never a wrapped object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i64);

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label(value)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verdict attached to a feedback submission.
///
/// The wire values are `"valide"` / `"non_valide"`; anything else is not a
/// verdict and produces no telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// The caller confirms the prediction was correct.
    Validated,
    /// The caller reports the prediction was wrong.
    Rejected,
}

impl FeedbackKind {
    /// Parse the wire representation. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "valide" => Some(FeedbackKind::Validated),
            "non_valide" => Some(FeedbackKind::Rejected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_as_bare_integer() {
        let json = serde_json::to_string(&vec![Label(1), Label(0)]).unwrap();
        assert_eq!(json, "[1,0]");
    }

    #[test]
    fn feedback_kind_parses_wire_values() {
        assert_eq!(FeedbackKind::parse("valide"), Some(FeedbackKind::Validated));
        assert_eq!(
            FeedbackKind::parse("non_valide"),
            Some(FeedbackKind::Rejected)
        );
    }

    #[test]
    fn feedback_kind_rejects_unknown_values() {
        assert_eq!(FeedbackKind::parse("maybe"), None);
        assert_eq!(FeedbackKind::parse(""), None);
        assert_eq!(FeedbackKind::parse("VALIDE"), None);
    }
}
