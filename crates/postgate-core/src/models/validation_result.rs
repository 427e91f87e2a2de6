use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CheckId, CheckOutcome};

/// The verdict for one candidate post.
///
/// `passes` is always `issues.is_empty()`. Fields are private so the pair
/// cannot drift apart, and deserialization rejects JSON where they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValidationResult")]
pub struct ValidationResult {
    passes: bool,
    /// Blocking defects, each prefixed by the check's label.
    issues: Vec<String>,
    /// Non-blocking defects, each prefixed by the check's label.
    warnings: Vec<String>,
    /// One entry per check that ran, keyed by check name.
    details: BTreeMap<String, CheckOutcome>,
}

/// Wire shape of a verdict before the pass flag is checked.
#[derive(Deserialize)]
struct RawValidationResult {
    #[serde(default)]
    passes: Option<bool>,
    #[serde(default)]
    issues: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    details: BTreeMap<String, CheckOutcome>,
}

impl TryFrom<RawValidationResult> for ValidationResult {
    type Error = String;

    fn try_from(raw: RawValidationResult) -> Result<Self, Self::Error> {
        let result = Self::new(raw.issues, raw.warnings, raw.details);
        match raw.passes {
            Some(passes) if passes != result.passes => Err(format!(
                "passes={passes} contradicts {} issue(s)",
                result.issues.len()
            )),
            _ => Ok(result),
        }
    }
}

impl ValidationResult {
    pub fn new(
        issues: Vec<String>,
        warnings: Vec<String>,
        details: BTreeMap<String, CheckOutcome>,
    ) -> Self {
        Self {
            passes: issues.is_empty(),
            issues,
            warnings,
            details,
        }
    }

    pub fn passes(&self) -> bool {
        self.passes
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn details(&self) -> &BTreeMap<String, CheckOutcome> {
        &self.details
    }

    pub fn detail(&self, check: &str) -> Option<&CheckOutcome> {
        self.details.get(check)
    }

    /// Whether a blocking issue was raised by `check`.
    pub fn has_issue_for(&self, check: CheckId) -> bool {
        let prefix = format!("{}:", check.label());
        self.issues.iter().any(|i| i.starts_with(&prefix))
    }

    /// Whether a warning was raised by `check`.
    pub fn has_warning_for(&self, check: CheckId) -> bool {
        let prefix = format!("{}:", check.label());
        self.warnings.iter().any(|w| w.starts_with(&prefix))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
