//! Examples must be real, not templated: no `[Client Name]`, `<company>`,
//! `{metric}` or `$X` inside an example.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::leakage::{RE_EXAMPLE_HEADER, RE_EXAMPLE_PLACEHOLDER};
use crate::patterns::structure::RE_HASHTAG_LINE;
use crate::text::sections;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let header = compiled!(RE_EXAMPLE_HEADER)?;
    let placeholder = compiled!(RE_EXAMPLE_PLACEHOLDER)?;
    let hashtags = compiled!(RE_HASHTAG_LINE)?;

    let mut example_sections = 0usize;
    let mut found: Vec<&str> = Vec::new();
    for section in sections(ctx.body(), header, hashtags) {
        let in_example = header.is_match(section.heading);
        if in_example {
            example_sections += 1;
            found.extend(placeholder.find_iter(section.heading).map(|m| m.as_str()));
        }
        for line in section.lines {
            // Inline examples ("For example, [Client] saved...") count too.
            if in_example || header.is_match(line) {
                found.extend(placeholder.find_iter(line).map(|m| m.as_str()));
            }
        }
    }

    if found.is_empty() {
        let message = if example_sections == 0 {
            "no example sections".to_string()
        } else {
            format!("{example_sections} example section(s), all concrete")
        };
        return Ok(CheckOutcome::pass(message));
    }
    let payload = CheckPayload::tokens(found);
    let listed = match &payload {
        CheckPayload::Tokens { items } => items.join(", "),
        _ => String::new(),
    };
    Ok(CheckOutcome::fail(format!("examples contain placeholders: {listed}")).with_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{body, run};

    #[test]
    fn placeholder_in_example_section_fails() {
        let out = run(
            check,
            &body("Intro.\n\nExample:\n[Client Name] cut response time by X%.\n\nThanks."),
        );
        assert!(!out.passed);
        assert_eq!(out.tokens(), ["X%", "[Client Name]"]);
    }

    #[test]
    fn inline_example_is_checked() {
        let out = run(check, &body("For example, <company> saved $X every month."));
        assert!(!out.passed);
        assert_eq!(out.tokens(), ["$X", "<company>"]);
    }

    #[test]
    fn concrete_examples_pass() {
        let out = run(
            check,
            &body("For example:\nA dental clinic in Leeds cut no-shows by 30%."),
        );
        assert!(out.passed, "{}", out.message);
    }

    #[test]
    fn brackets_outside_examples_are_ignored() {
        assert!(run(check, &body("We used [our own tool] for this.")).passed);
    }
}
