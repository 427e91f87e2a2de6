//! Partition executed checks into issues, warnings, and details.

use std::collections::BTreeMap;

use postgate_core::config::ClassificationConfig;
use postgate_core::{CheckOutcome, CheckPayload, Classification, ValidationResult};

use crate::runner::ExecutedCheck;

/// Build the verdict. Issue and warning order follow `executed` order.
///
/// A failed check goes to `issues` or `warnings` by its effective
/// classification. A faulted check is always a blocking issue.
pub fn aggregate(
    executed: Vec<ExecutedCheck>,
    classes: &ClassificationConfig,
) -> ValidationResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();
    let mut details = BTreeMap::new();

    for ExecutedCheck { descriptor, result } in executed {
        let id = descriptor.id;
        let outcome = match result {
            Ok(outcome) => {
                if !outcome.passed {
                    let line = format!("{}: {}", id.label(), outcome.message);
                    match classes.effective(id, descriptor.classification) {
                        Classification::Blocking => {
                            tracing::debug!(check = id.as_str(), "blocking issue");
                            issues.push(line);
                        }
                        Classification::Warning => {
                            tracing::debug!(check = id.as_str(), "warning");
                            warnings.push(line);
                        }
                    }
                }
                outcome
            }
            Err(fault) => {
                let error = fault.to_string();
                issues.push(format!("{}: check could not run ({error})", id.label()));
                CheckOutcome::fail(format!("check could not run: {error}"))
                    .with_payload(CheckPayload::Fault { error })
            }
        };
        details.insert(id.as_str().to_string(), outcome);
    }

    ValidationResult::new(issues, warnings, details)
}
