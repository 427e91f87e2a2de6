//! Threshold configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Scalar thresholds as written in config. `None` means "use the default".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum body length in characters. Default: 300.
    pub min_length: Option<usize>,
    /// Ratio at which a corpus match is labelled a near-duplicate. Default: 0.85.
    pub near_duplicate: Option<f64>,
    /// Ratio against any corpus entry at or above which the post is rejected. Default: 0.75.
    pub max_similarity: Option<f64>,
    /// Minimum share of topic keywords found in the body. Default: 0.3.
    pub min_topic_coverage: Option<f64>,
    /// Minimum weighted authenticity signal count. Default: 3.
    pub min_authenticity_signals: Option<u32>,
    /// Character ceiling for a "how it works" section. Default: 600.
    pub max_technical_chars: Option<usize>,
    /// Word-overlap ratio above which two hooks count as repeated. Default: 0.5.
    pub hook_overlap_ratio: Option<f64>,
    /// Common words that must be exceeded for a repeated hook. Default: 3.
    pub hook_min_common_words: Option<usize>,
}

impl ThresholdConfig {
    pub fn effective_min_length(&self) -> usize {
        self.min_length.unwrap_or(defaults::DEFAULT_MIN_LENGTH)
    }

    pub fn effective_near_duplicate(&self) -> f64 {
        self.near_duplicate.unwrap_or(defaults::DEFAULT_NEAR_DUPLICATE)
    }

    pub fn effective_max_similarity(&self) -> f64 {
        self.max_similarity.unwrap_or(defaults::DEFAULT_MAX_SIMILARITY)
    }

    pub fn effective_min_topic_coverage(&self) -> f64 {
        self.min_topic_coverage
            .unwrap_or(defaults::DEFAULT_MIN_TOPIC_COVERAGE)
    }

    pub fn effective_min_authenticity_signals(&self) -> u32 {
        self.min_authenticity_signals
            .unwrap_or(defaults::DEFAULT_MIN_AUTHENTICITY_SIGNALS)
    }

    pub fn effective_max_technical_chars(&self) -> usize {
        self.max_technical_chars
            .unwrap_or(defaults::DEFAULT_MAX_TECHNICAL_CHARS)
    }

    pub fn effective_hook_overlap_ratio(&self) -> f64 {
        self.hook_overlap_ratio
            .unwrap_or(defaults::DEFAULT_HOOK_OVERLAP_RATIO)
    }

    pub fn effective_hook_min_common_words(&self) -> usize {
        self.hook_min_common_words
            .unwrap_or(defaults::DEFAULT_HOOK_MIN_COMMON_WORDS)
    }

    /// Resolve every threshold to a concrete value.
    pub fn resolve(&self) -> Thresholds {
        Thresholds {
            min_length: self.effective_min_length(),
            near_duplicate: self.effective_near_duplicate(),
            max_similarity: self.effective_max_similarity(),
            min_topic_coverage: self.effective_min_topic_coverage(),
            min_authenticity_signals: self.effective_min_authenticity_signals(),
            max_technical_chars: self.effective_max_technical_chars(),
            hook_overlap_ratio: self.effective_hook_overlap_ratio(),
            hook_min_common_words: self.effective_hook_min_common_words(),
        }
    }
}

/// Resolved thresholds handed to every check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_length: usize,
    pub near_duplicate: f64,
    pub max_similarity: f64,
    pub min_topic_coverage: f64,
    pub min_authenticity_signals: u32,
    pub max_technical_chars: usize,
    pub hook_overlap_ratio: f64,
    pub hook_min_common_words: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        ThresholdConfig::default().resolve()
    }
}
