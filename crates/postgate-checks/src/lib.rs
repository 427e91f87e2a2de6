//! # postgate-checks
//!
//! Independent heuristic checks over a candidate post. Each check inspects
//! one defect class and returns a [`CheckOutcome`](postgate_core::CheckOutcome);
//! none of them mutate the post or depend on another check's result.
//!
//! The orchestrator iterates [`registry()`], an ordered table of
//! [`CheckDescriptor`]s.

pub mod patterns;

pub mod checks;
pub mod context;
pub mod registry;
pub mod text;

pub use context::{CheckContext, CorpusSnapshot};
pub use registry::{registry, CheckDescriptor, CheckFn, Requirement};
