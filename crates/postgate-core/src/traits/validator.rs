use crate::models::{CandidatePost, ValidationResult};

/// Content-quality validation of a candidate post.
pub trait IPostValidator: Send + Sync {
    /// Run every eligible check and return the complete verdict.
    /// Never fails: bad input and collaborator outages end up in the verdict.
    fn validate(&self, post: &CandidatePost, check_duplicates: bool) -> ValidationResult;
}
