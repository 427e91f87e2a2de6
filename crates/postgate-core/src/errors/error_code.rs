//! Stable error codes attached to log events and CLI output.

/// Every error enum provides a structured code string.
pub trait PostgateErrorCode {
    /// Returns the error code string (e.g., "CORPUS_TIMEOUT").
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CORPUS_UNAVAILABLE: &str = "CORPUS_UNAVAILABLE";
pub const CORPUS_TIMEOUT: &str = "CORPUS_TIMEOUT";
pub const CORPUS_MALFORMED: &str = "CORPUS_MALFORMED";
pub const PATTERN_UNAVAILABLE: &str = "PATTERN_UNAVAILABLE";
pub const CHECK_FAULT: &str = "CHECK_FAULT";
