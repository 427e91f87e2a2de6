//! Lines that end mid-word ("...and it was actu").
//!
//! Known-imprecise: the stem list and the valid-ending precedence are
//! heuristics and will miss fragments outside the list.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::structure::{
    RE_DECORATIVE_LABEL, RE_HASHTAG_LINE, RE_INCOMPLETE_STEM, RE_VALID_ENDING,
};
use crate::text::last_word;

/// Label lines shorter than this are skipped when decorative.
const SHORT_LABEL_CHARS: usize = 30;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let stem = compiled!(RE_INCOMPLETE_STEM)?;
    let valid = compiled!(RE_VALID_ENDING)?;
    let label = compiled!(RE_DECORATIVE_LABEL)?;
    let hashtags = compiled!(RE_HASHTAG_LINE)?;

    let mut fragments = Vec::new();
    for line in ctx.body().lines().map(str::trim) {
        if line.is_empty() || hashtags.is_match(line) {
            continue;
        }
        if line.chars().count() < SHORT_LABEL_CHARS && label.is_match(line) {
            continue;
        }
        let Some(word) = last_word(line) else {
            continue;
        };
        if stem.is_match(&word) && !valid.is_match(&word) {
            fragments.push(word);
        }
    }

    if fragments.is_empty() {
        return Ok(CheckOutcome::pass("no truncated words"));
    }
    let payload = CheckPayload::tokens(fragments);
    let listed = match &payload {
        CheckPayload::Tokens { items } => items.join(", "),
        _ => String::new(),
    };
    Ok(CheckOutcome::fail(format!("lines end mid-word: {listed}")).with_payload(payload))
}
