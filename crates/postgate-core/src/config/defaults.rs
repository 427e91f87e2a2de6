//! Compiled defaults for every tunable value.

pub const DEFAULT_MIN_LENGTH: usize = 300;
pub const DEFAULT_NEAR_DUPLICATE: f64 = 0.85;
pub const DEFAULT_MAX_SIMILARITY: f64 = 0.75;
pub const DEFAULT_MIN_TOPIC_COVERAGE: f64 = 0.3;
pub const DEFAULT_MIN_AUTHENTICITY_SIGNALS: u32 = 3;
pub const DEFAULT_MAX_TECHNICAL_CHARS: usize = 600;
pub const DEFAULT_HOOK_OVERLAP_RATIO: f64 = 0.5;
pub const DEFAULT_HOOK_MIN_COMMON_WORDS: usize = 3;
pub const DEFAULT_CORPUS_FETCH_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PARALLEL: bool = false;
