//! # postgate-engine
//!
//! The validation orchestrator. One call to
//! [`ValidationEngine::validate`] runs every eligible check against an
//! immutable post and a single corpus snapshot, classifies failures into
//! blocking issues and warnings, and returns the complete verdict. There is
//! no short-circuiting and no state carried between calls.

pub mod aggregate;
pub mod corpus;
pub mod engine;
pub mod phase;
pub mod runner;

pub use corpus::{CorpusFetcher, FileCorpus, StaticCorpus, UnavailableCorpus};
pub use engine::ValidationEngine;
pub use phase::ValidationPhase;
