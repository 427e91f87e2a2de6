//! Blocking/warning overrides.

use serde::{Deserialize, Serialize};

use crate::models::{CheckId, Classification};

/// Per-check classification overrides, by check name.
///
/// A stricter deployment promotes warnings to blocking; a lenient one
/// demotes blocking checks to warnings. Promotion wins if a check is
/// listed in both.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClassificationConfig {
    pub promote_to_blocking: Vec<String>,
    pub demote_to_warning: Vec<String>,
}

impl ClassificationConfig {
    /// Classification for `check`, given its built-in default.
    pub fn effective(&self, check: CheckId, default: Classification) -> Classification {
        let name = check.as_str();
        if self.promote_to_blocking.iter().any(|n| n == name) {
            Classification::Blocking
        } else if self.demote_to_warning.iter().any(|n| n == name) {
            Classification::Warning
        } else {
            default
        }
    }

    /// Names that do not correspond to a known check.
    pub fn unknown_names(&self) -> Vec<&str> {
        self.promote_to_blocking
            .iter()
            .chain(self.demote_to_warning.iter())
            .map(String::as_str)
            .filter(|n| n.parse::<CheckId>().is_err())
            .collect()
    }
}
