//! Corpus collaborator configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CorpusConfig {
    /// Timeout for one corpus fetch. Default: 5000ms.
    pub fetch_timeout_ms: Option<u64>,
}

impl CorpusConfig {
    pub fn effective_fetch_timeout(&self) -> Duration {
        Duration::from_millis(
            self.fetch_timeout_ms
                .unwrap_or(defaults::DEFAULT_CORPUS_FETCH_TIMEOUT_MS),
        )
    }
}
