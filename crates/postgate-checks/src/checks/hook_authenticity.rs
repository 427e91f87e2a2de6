//! Templated openings with nothing specific or personal in them.
//!
//! Fails only when all three hold: the hook matches a generic opening, has
//! no specificity signal (quantity, money, proper-noun pair), and has no
//! personal voice (contraction or first person).

use postgate_core::{CheckError, CheckOutcome};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::voice::{
    RE_CONTRACTION, RE_FIRST_PERSON, RE_GENERIC_OPENING, RE_MONEY, RE_PROPER_NOUN_PAIR,
    RE_SPECIFIC_QUANTITY,
};

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let generic = compiled!(RE_GENERIC_OPENING)?;
    let quantity = compiled!(RE_SPECIFIC_QUANTITY)?;
    let money = compiled!(RE_MONEY)?;
    let proper_noun = compiled!(RE_PROPER_NOUN_PAIR)?;
    let contraction = compiled!(RE_CONTRACTION)?;
    let first_person = compiled!(RE_FIRST_PERSON)?;

    let Some(hook) = ctx.post.hook() else {
        return Ok(CheckOutcome::pass("no opening line"));
    };
    // Leading emoji or bullets do not change what the sentence says.
    let hook = hook.trim_start_matches(|c: char| !c.is_alphanumeric());

    if !generic.is_match(hook) {
        return Ok(CheckOutcome::pass("opening is not a stock phrase"));
    }
    if quantity.is_match(hook) || money.is_match(hook) || proper_noun.is_match(hook) {
        return Ok(CheckOutcome::pass("stock opening, but made specific"));
    }
    if contraction.is_match(hook) || first_person.is_match(hook) {
        return Ok(CheckOutcome::pass("stock opening, but in a personal voice"));
    }
    Ok(CheckOutcome::fail(format!(
        "generic opening with no specifics or personal voice: \"{hook}\""
    )))
}
