//! Checker faults.

use super::error_code::{self, PostgateErrorCode};

/// A check could not produce an outcome. Converted by the engine into a
/// blocking issue naming the check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("pattern '{pattern}' failed to compile")]
    PatternUnavailable { pattern: &'static str },

    /// The check panicked; `reason` is the panic message.
    #[error("check panicked: {reason}")]
    Panicked { check: &'static str, reason: String },
}

impl PostgateErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternUnavailable { .. } => error_code::PATTERN_UNAVAILABLE,
            Self::Panicked { .. } => error_code::CHECK_FAULT,
        }
    }
}
