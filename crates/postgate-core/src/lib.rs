//! # postgate-core
//!
//! Foundation crate for the postgate content validation pipeline.
//! Defines the post and verdict types, check identifiers, configuration,
//! errors, collaborator traits, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{PostgateConfig, Thresholds};
pub use errors::{CheckError, ConfigError, CorpusError, PostgateErrorCode};
pub use models::{
    CandidatePost, CheckId, CheckOutcome, CheckPayload, Classification, ModeFlag,
    ValidationResult,
};
pub use traits::{ICorpusSource, IPostValidator};
