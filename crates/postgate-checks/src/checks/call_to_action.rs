//! The post must invite the reader to do something.

use postgate_core::{CheckError, CheckOutcome};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::engagement::RE_CALL_TO_ACTION;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let re = compiled!(RE_CALL_TO_ACTION)?;
    match re.find(ctx.body()) {
        Some(m) => Ok(CheckOutcome::pass(format!(
            "call to action found: \"{}\"",
            m.as_str()
        ))),
        None => Ok(CheckOutcome::fail(
            "no call to action (comment, share, DM, book a call, ...)",
        )),
    }
}
