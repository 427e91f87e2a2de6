//! Unfilled template variables such as `{client_name}`.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::leakage::RE_PLACEHOLDER;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let re = compiled!(RE_PLACEHOLDER)?;
    let body = ctx.body();

    // `{name}}` is the tail of a double-brace token, not a template slot.
    let found: Vec<&str> = re
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if body[whole.end()..].starts_with('}') {
                return None;
            }
            caps.get(1).map(|m| m.as_str())
        })
        .collect();

    if found.is_empty() {
        return Ok(CheckOutcome::pass("no template placeholders"));
    }
    let payload = CheckPayload::tokens(found);
    let names = payload_items(&payload);
    Ok(CheckOutcome::fail(format!("unfilled placeholders: {names}")).with_payload(payload))
}

fn payload_items(payload: &CheckPayload) -> String {
    match payload {
        CheckPayload::Tokens { items } => items
            .iter()
            .map(|i| format!("{{{i}}}"))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
