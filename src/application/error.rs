//! Application-layer error definitions

use thiserror::Error;

/// Errors produced by the inference and feedback services.
///
/// The display strings are part of the HTTP contract: the error body of a
/// response carries them verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The artifact never loaded; every prediction is refused until restart.
    #[error("pipeline not available for prediction")]
    PipelineUnavailable,

    /// Required request field absent.
    #[error("missing '{0}' field in request")]
    MissingField(&'static str),

    /// Feedback body missing one of its required keys, or unparseable.
    #[error("invalid request")]
    InvalidRequest,

    /// Anything that went wrong while extracting the input or running the
    /// pipeline. Reported to the caller with the raw message, matching the
    /// service's historical behavior of answering 400 for these.
    #[error("{0}")]
    Inference(String),
}

impl ServiceError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_match_the_http_contract() {
        assert_eq!(
            ServiceError::PipelineUnavailable.to_string(),
            "pipeline not available for prediction"
        );
        assert_eq!(
            ServiceError::MissingField("text").to_string(),
            "missing 'text' field in request"
        );
        assert_eq!(ServiceError::InvalidRequest.to_string(), "invalid request");
        assert_eq!(ServiceError::inference("boom").to_string(), "boom");
    }
}
