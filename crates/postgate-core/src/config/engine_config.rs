//! Orchestrator execution settings.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Run checks on the rayon pool. Results are identical either way. Default: false.
    pub parallel: Option<bool>,
}

impl EngineConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(defaults::DEFAULT_PARALLEL)
    }
}
