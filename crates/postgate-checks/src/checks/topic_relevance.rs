//! Body must actually be about the topic it was generated from.
//!
//! Coverage is the share of topic keywords found among body words, with
//! simple plural tolerance. A "how to" topic, or the tutorial mode flag,
//! additionally requires an instructional marker in the body.

use postgate_core::{CheckError, CheckOutcome, CheckPayload, ModeFlag};
use rustc_hash::FxHashSet;

use crate::context::CheckContext;
use crate::patterns::compiled;
use crate::patterns::engagement::{RE_HOW_TO_TOPIC, RE_INSTRUCTIONAL};
use crate::text::{keywords, word_set};

fn body_mentions(body_words: &FxHashSet<String>, keyword: &str) -> bool {
    if body_words.contains(keyword)
        || body_words.contains(&format!("{keyword}s"))
        || body_words.contains(&format!("{keyword}es"))
    {
        return true;
    }
    keyword
        .strip_suffix("es")
        .into_iter()
        .chain(keyword.strip_suffix('s'))
        .any(|singular| body_words.contains(singular))
}

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let how_to = compiled!(RE_HOW_TO_TOPIC)?;
    let instructional = compiled!(RE_INSTRUCTIONAL)?;
    let post = ctx.post;

    let mut problems = Vec::new();
    let needs_instructions = post.has_mode(ModeFlag::Tutorial) || how_to.is_match(&post.topic);
    if needs_instructions && !instructional.is_match(&post.body) {
        problems.push(
            "topic promises a how-to but the body has no steps or instructions".to_string(),
        );
    }

    let topic_keywords = keywords(&post.topic);
    if topic_keywords.is_empty() {
        return Ok(match problems.pop() {
            Some(problem) => CheckOutcome::fail(problem),
            None => CheckOutcome::pass("no topic keywords to match"),
        });
    }

    let body_words = word_set(&post.body, 0);
    let (matched, missing): (Vec<String>, Vec<String>) = topic_keywords
        .into_iter()
        .partition(|k| body_mentions(&body_words, k));
    let ratio = matched.len() as f64 / (matched.len() + missing.len()) as f64;
    let minimum = ctx.thresholds.min_topic_coverage;
    if ratio < minimum {
        problems.push(format!(
            "off-topic: {:.0}% of topic keywords present (minimum {:.0}%), missing {}",
            ratio * 100.0,
            minimum * 100.0,
            missing.join(", ")
        ));
    }

    let outcome = if problems.is_empty() {
        CheckOutcome::pass(format!("topic coverage {:.0}%", ratio * 100.0))
    } else {
        CheckOutcome::fail(problems.join("; "))
    };
    Ok(outcome.with_payload(CheckPayload::Coverage {
        ratio,
        matched,
        missing,
    }))
}
