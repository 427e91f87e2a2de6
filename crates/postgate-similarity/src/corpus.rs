//! Closest-entry search over a corpus snapshot.

use serde::{Deserialize, Serialize};

use crate::matcher::{similarity_normalized, upper_bound};
use crate::normalize::normalize;

/// The corpus entry most similar to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusMatch {
    /// Position of the entry in corpus iteration order.
    pub index: usize,
    pub ratio: f64,
}

/// Find the corpus entry with the highest similarity to `candidate`.
///
/// Returns `None` for an empty corpus. Ties go to the entry encountered
/// first. Entries whose character-count upper bound cannot beat the best
/// ratio so far are skipped without alignment.
pub fn best_match<S: AsRef<str>>(candidate: &str, corpus: &[S]) -> Option<CorpusMatch> {
    let candidate = normalize(candidate);
    let candidate_chars: Vec<char> = candidate.chars().collect();
    let mut best: Option<CorpusMatch> = None;
    let mut pruned = 0usize;

    for (index, entry) in corpus.iter().enumerate() {
        let entry = normalize(entry.as_ref());
        if let Some(current) = best {
            let entry_chars: Vec<char> = entry.chars().collect();
            if upper_bound(&candidate_chars, &entry_chars) <= current.ratio {
                pruned += 1;
                continue;
            }
        }
        let ratio = similarity_normalized(&candidate, &entry);
        if best.map_or(true, |b| ratio > b.ratio) {
            best = Some(CorpusMatch { index, ratio });
        }
    }

    tracing::trace!(
        corpus_size = corpus.len(),
        pruned,
        best_ratio = best.map(|b| b.ratio),
        "corpus best match"
    );
    best
}
