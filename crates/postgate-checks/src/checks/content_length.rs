//! Body must reach the minimum length. An empty body lands here as a
//! blocking issue rather than a fault.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let chars = ctx.body().chars().count();
    let minimum = ctx.thresholds.min_length;
    let payload = CheckPayload::Length { chars, minimum };

    let outcome = if chars >= minimum {
        CheckOutcome::pass(format!("{chars} characters (minimum {minimum})"))
    } else {
        CheckOutcome::fail(format!("too short: {chars} characters, minimum is {minimum}"))
    };
    Ok(outcome.with_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{body, run};

    #[test]
    fn boundary_is_inclusive() {
        assert!(!run(check, &body(&"a".repeat(299))).passed);
        assert!(run(check, &body(&"a".repeat(300))).passed);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let out = run(check, &body(&"é".repeat(300)));
        assert!(out.passed);
        assert_eq!(
            out.payload,
            Some(CheckPayload::Length {
                chars: 300,
                minimum: 300
            })
        );
    }

    #[test]
    fn empty_body_fails_with_message() {
        let out = run(check, &body(""));
        assert!(!out.passed);
        assert!(out.message.contains("too short"));
    }
}
