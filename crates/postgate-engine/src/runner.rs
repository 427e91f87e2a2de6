//! Runs checks with fault isolation, sequentially or on the rayon pool.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use postgate_checks::{CheckContext, CheckDescriptor};
use postgate_core::{CheckError, CheckOutcome, PostgateErrorCode};
use rayon::prelude::*;

/// One check after it ran. `Err` holds the fault, panics included.
#[derive(Debug, Clone)]
pub struct ExecutedCheck {
    pub descriptor: CheckDescriptor,
    pub result: Result<CheckOutcome, CheckError>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run one check. Neither an error nor a panic escapes.
pub fn run_guarded(descriptor: &CheckDescriptor, ctx: &CheckContext<'_>) -> ExecutedCheck {
    let name = descriptor.id.as_str();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (descriptor.run)(ctx)))
        .unwrap_or_else(|payload| {
            Err(CheckError::Panicked {
                check: name,
                reason: panic_message(payload.as_ref()),
            })
        });
    if let Err(err) = &result {
        tracing::error!(check = name, code = err.error_code(), error = %err, "check faulted");
    }
    ExecutedCheck {
        descriptor: *descriptor,
        result,
    }
}

/// Run every descriptor in `checks`. Output order always matches input order.
pub fn run_all(
    checks: &[&CheckDescriptor],
    ctx: &CheckContext<'_>,
    parallel: bool,
) -> Vec<ExecutedCheck> {
    if parallel {
        checks.par_iter().map(|d| run_guarded(d, ctx)).collect()
    } else {
        checks.iter().map(|d| run_guarded(d, ctx)).collect()
    }
}
