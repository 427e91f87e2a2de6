//! Numbered instructions must form a plausible list: at least two steps and
//! no jump of more than two between consecutive numbers.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::structure::RE_NUMBERED_STEP;

/// Largest allowed difference between consecutive step numbers.
const MAX_STEP_GAP: u32 = 2;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let re = compiled!(RE_NUMBERED_STEP)?;

    let numbers: Vec<u32> = ctx
        .body()
        .lines()
        .filter_map(|line| re.captures(line)?.get(1)?.as_str().parse().ok())
        .collect();

    match numbers.len() {
        0 => return Ok(CheckOutcome::pass("no numbered steps")),
        1 => {
            return Ok(CheckOutcome::fail(format!(
                "only one numbered step ({}), a list needs at least two",
                numbers[0]
            )))
        }
        _ => {}
    }

    // A number that does not increase starts a new list.
    let gaps: Vec<String> = numbers
        .windows(2)
        .filter(|w| w[1] > w[0] && w[1] - w[0] > MAX_STEP_GAP)
        .map(|w| format!("{} -> {}", w[0], w[1]))
        .collect();

    if gaps.is_empty() {
        return Ok(CheckOutcome::pass(format!("{} numbered steps", numbers.len())));
    }
    let message = format!("step numbering skips: {}", gaps.join(", "));
    Ok(CheckOutcome::fail(message).with_payload(CheckPayload::tokens(gaps)))
}
