//! Copywriting-framework scaffolding left in the output: `[PROBLEM]`, `[STEP 2]`.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::leakage::RE_INTERNAL_LABEL;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let re = compiled!(RE_INTERNAL_LABEL)?;
    let found: Vec<&str> = re.find_iter(ctx.body()).map(|m| m.as_str()).collect();

    if found.is_empty() {
        return Ok(CheckOutcome::pass("no internal labels"));
    }
    let payload = CheckPayload::tokens(found);
    let listed = payload_list(&payload);
    Ok(CheckOutcome::fail(format!("framework labels left in text: {listed}")).with_payload(payload))
}

fn payload_list(payload: &CheckPayload) -> String {
    match payload {
        CheckPayload::Tokens { items } => items.join(", "),
        _ => String::new(),
    }
}
