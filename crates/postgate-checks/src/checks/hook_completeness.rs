//! Opening line that starts mid-thought and never finishes.

use postgate_core::{CheckError, CheckOutcome};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::voice::{RE_INCOMPLETE_THOUGHT, RE_TERMINAL_PUNCTUATION};

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let transition = compiled!(RE_INCOMPLETE_THOUGHT)?;
    let terminal = compiled!(RE_TERMINAL_PUNCTUATION)?;

    let mut lines = ctx.body().lines().map(str::trim).skip_while(|l| l.is_empty());
    let Some(hook) = lines.next() else {
        return Ok(CheckOutcome::pass("no opening line"));
    };

    if !transition.is_match(hook) || terminal.is_match(hook) {
        return Ok(CheckOutcome::pass("opening line is complete"));
    }

    // The next line, with no blank line between, may finish the sentence.
    let completed = lines
        .next()
        .is_some_and(|next| !next.is_empty() && terminal.is_match(next));
    if completed {
        return Ok(CheckOutcome::pass("opening thought continues on the next line"));
    }

    Ok(CheckOutcome::fail(format!(
        "opening line is an unfinished thought: \"{hook}\""
    )))
}
