//! Span names used across postgate, kept in one place so structured log
//! queries work across crates.

/// Span wrapping one validation call.
pub const VALIDATE_SPAN: &str = "postgate.validate";

/// Span wrapping one corpus fetch.
pub const CORPUS_FETCH_SPAN: &str = "postgate.corpus_fetch";
