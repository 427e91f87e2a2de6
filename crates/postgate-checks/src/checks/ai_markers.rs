//! Artifacts typical of machine-written posts. Any single marker fails.

use postgate_core::constants::MAX_EXCERPT_CHARS;
use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::markers::{RE_CORPORATE_JARGON, RE_EMOJI_BRACKETED, RE_RIGID_TRANSITION};
use crate::text::excerpt;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let bracketed = compiled!(RE_EMOJI_BRACKETED)?;
    let transition = compiled!(RE_RIGID_TRANSITION)?;
    let jargon = compiled!(RE_CORPORATE_JARGON)?;
    let body = ctx.body();

    let mut markers: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|l| bracketed.is_match(l))
        .map(|l| excerpt(l, MAX_EXCERPT_CHARS))
        .collect();
    markers.extend(transition.find_iter(body).map(|m| m.as_str().to_lowercase()));
    markers.extend(jargon.find_iter(body).map(|m| m.as_str().to_lowercase()));

    if markers.is_empty() {
        return Ok(CheckOutcome::pass("no AI-generation markers"));
    }
    let count = markers.len();
    let payload = CheckPayload::tokens(markers);
    let listed = match &payload {
        CheckPayload::Tokens { items } => items.join(", "),
        _ => String::new(),
    };
    Ok(
        CheckOutcome::fail(format!("{count} AI-generation marker(s): {listed}"))
            .with_payload(payload),
    )
}
