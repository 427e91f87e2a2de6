//! # postgate-similarity
//!
//! Character-level similarity between post bodies.
//!
//! Texts are normalized (whitespace collapsed, lowercased) and aligned with
//! Ratcliff–Obershelp block matching: take the longest common block, recurse
//! on what lies left and right of it, and score
//! `2 * matched / (len(a) + len(b))`. The score rewards order as well as
//! content, so it catches near-verbatim regeneration and deliberately misses
//! paraphrase.

pub mod corpus;
pub mod matcher;
pub mod normalize;
pub mod thresholds;

pub use corpus::{best_match, CorpusMatch};
pub use matcher::{matching_chars, similarity, similarity_normalized};
pub use normalize::normalize;
pub use thresholds::{SimilarityClass, SimilarityThresholds};
