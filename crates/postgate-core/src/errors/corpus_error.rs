//! Corpus collaborator errors.

use super::error_code::{self, PostgateErrorCode};

/// Failures of the external corpus fetch. All of them are recovered by
/// the engine as a "no corpus available" snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("corpus fetch timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("corpus malformed: {reason}")]
    Malformed { reason: String },
}

impl PostgateErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::CORPUS_UNAVAILABLE,
            Self::Timeout { .. } => error_code::CORPUS_TIMEOUT,
            Self::Malformed { .. } => error_code::CORPUS_MALFORMED,
        }
    }
}
