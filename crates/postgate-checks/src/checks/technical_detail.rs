//! Automation showcases must not turn into a wall of process: any "how it
//! works" section over the character ceiling fails.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::structure::{RE_HASHTAG_LINE, RE_TECH_SECTION_HEADER};
use crate::text::sections;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let header = compiled!(RE_TECH_SECTION_HEADER)?;
    let hashtags = compiled!(RE_HASHTAG_LINE)?;
    let ceiling = ctx.thresholds.max_technical_chars;

    let mut longest = 0usize;
    let mut oversized: Vec<String> = Vec::new();
    for section in sections(ctx.body(), header, hashtags) {
        if !header.is_match(section.heading) {
            continue;
        }
        let len = section.char_len();
        longest = longest.max(len);
        if len > ceiling {
            oversized.push(section.heading.trim_end_matches(':').to_string());
        }
    }

    if oversized.is_empty() {
        return Ok(CheckOutcome::pass(format!(
            "technical sections within {ceiling} characters (longest {longest})"
        )));
    }
    Ok(CheckOutcome::fail(format!(
        "technical section too long: {longest} characters, ceiling is {ceiling}"
    ))
    .with_payload(CheckPayload::tokens(oversized)))
}
