//! One module per check. Every `check` has the [`CheckFn`](crate::CheckFn)
//! signature and only borrows the post.

pub mod ai_markers;
pub mod authenticity_signals;
pub mod call_to_action;
pub mod content_length;
pub mod corpus_similarity;
pub mod example_quality;
pub mod hook_authenticity;
pub mod hook_completeness;
pub mod hook_repetition;
pub mod internal_labels;
pub mod placeholders;
pub mod step_completeness;
pub mod technical_detail;
pub mod topic_relevance;
pub mod truncation;
