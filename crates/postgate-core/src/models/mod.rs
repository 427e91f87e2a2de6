//! Per-call data model: the candidate post, check outcomes, and the verdict.
//!
//! Everything here is created fresh for one validation call and discarded
//! once the caller has consumed the verdict.

pub mod check;
pub mod outcome;
pub mod post;
pub mod validation_result;

pub use check::{CheckId, Classification};
pub use outcome::{CheckOutcome, CheckPayload};
pub use post::{CandidatePost, ModeFlag};
pub use validation_result::ValidationResult;
