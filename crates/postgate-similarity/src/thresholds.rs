//! Classification of a similarity ratio.

use serde::{Deserialize, Serialize};

/// Ratios at which a corpus match becomes a problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityThresholds {
    /// At or above: informational "near-duplicate" label.
    pub near_duplicate: f64,
    /// At or above: the candidate is rejected.
    pub max_allowed: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            near_duplicate: 0.85,
            max_allowed: 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityClass {
    Distinct,
    TooSimilar,
    NearDuplicate,
}

impl SimilarityThresholds {
    pub fn classify(&self, ratio: f64) -> SimilarityClass {
        if ratio >= self.near_duplicate {
            SimilarityClass::NearDuplicate
        } else if ratio >= self.max_allowed {
            SimilarityClass::TooSimilar
        } else {
            SimilarityClass::Distinct
        }
    }

    /// Whether `ratio` rejects the candidate.
    pub fn is_blocking(&self, ratio: f64) -> bool {
        ratio >= self.max_allowed
    }
}
