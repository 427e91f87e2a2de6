//! Error handling for postgate.
//! One error enum per subsystem, `thiserror` only; `anyhow` stays in the CLI.

pub mod check_error;
pub mod config_error;
pub mod corpus_error;
pub mod error_code;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::PostgateErrorCode;
