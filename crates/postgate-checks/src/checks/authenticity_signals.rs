//! Weighted count of signals that a real person with real experience wrote
//! the post.
//!
//! | class       | cap | weight |
//! |-------------|-----|--------|
//! | quantities  | 3   | 1      |
//! | first person| 2   | 1      |
//! | concrete    | 2   | 1      |
//! | difficulty  | 1   | 2      |

use std::collections::BTreeMap;

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::voice::{
    RE_CONCRETE_NOUN, RE_DIFFICULTY, RE_FIRST_PERSON, RE_MONEY, RE_SPECIFIC_QUANTITY,
};

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let quantity = compiled!(RE_SPECIFIC_QUANTITY)?;
    let money = compiled!(RE_MONEY)?;
    let first_person = compiled!(RE_FIRST_PERSON)?;
    let concrete = compiled!(RE_CONCRETE_NOUN)?;
    let difficulty = compiled!(RE_DIFFICULTY)?;
    let body = ctx.body();

    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "quantities".to_string(),
        count(quantity.find_iter(body).count() + money.find_iter(body).count()).min(3),
    );
    breakdown.insert(
        "first_person".to_string(),
        count(first_person.find_iter(body).count()).min(2),
    );
    breakdown.insert(
        "concrete".to_string(),
        count(concrete.find_iter(body).count()).min(2),
    );
    breakdown.insert(
        "difficulty".to_string(),
        2 * count(difficulty.find_iter(body).count()).min(1),
    );

    let total: u32 = breakdown.values().sum();
    let minimum = ctx.thresholds.min_authenticity_signals;
    let outcome = if total >= minimum {
        CheckOutcome::pass(format!("{total} authenticity signals"))
    } else {
        CheckOutcome::fail(format!(
            "reads as generic: {total} authenticity signal(s), want at least {minimum}"
        ))
    };
    Ok(outcome.with_payload(CheckPayload::Signals { total, breakdown }))
}
