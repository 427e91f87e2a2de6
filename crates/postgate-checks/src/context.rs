//! Inputs shared by every check for one validation call.

use postgate_core::{CandidatePost, Thresholds};

/// The corpus as seen by one validation call: fetched at most once.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusSnapshot {
    /// Duplicate checking is off for this call.
    NotRequested,
    Available(Vec<String>),
    /// The fetch failed or timed out. Corpus checks pass with a
    /// "could not compare" message.
    Unavailable { reason: String },
}

impl CorpusSnapshot {
    pub fn entries(&self) -> Option<&[String]> {
        match self {
            Self::Available(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Borrowed view handed to each check.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub post: &'a CandidatePost,
    pub thresholds: &'a Thresholds,
    pub corpus: &'a CorpusSnapshot,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        post: &'a CandidatePost,
        thresholds: &'a Thresholds,
        corpus: &'a CorpusSnapshot,
    ) -> Self {
        Self {
            post,
            thresholds,
            corpus,
        }
    }

    pub fn body(&self) -> &'a str {
        &self.post.body
    }
}
