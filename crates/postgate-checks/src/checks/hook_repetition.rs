//! The opening line must not recycle an earlier post's opening.

use postgate_core::models::post::first_content_line;
use postgate_core::{CheckError, CheckOutcome, CheckPayload};

use crate::context::{CheckContext, CorpusSnapshot};
use crate::text::word_set;

/// Words this short or shorter are ignored when comparing hooks.
const MIN_WORD_CHARS: usize = 2;

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let corpus = match ctx.corpus {
        CorpusSnapshot::Available(entries) => entries,
        CorpusSnapshot::Unavailable { reason } => {
            return Ok(CheckOutcome::pass(format!(
                "could not compare hook against corpus: {reason}"
            )))
        }
        CorpusSnapshot::NotRequested => {
            return Ok(CheckOutcome::pass("duplicate checking not requested"))
        }
    };
    let Some(hook) = ctx.post.hook() else {
        return Ok(CheckOutcome::pass("no opening line"));
    };
    let hook_words = word_set(hook, MIN_WORD_CHARS);
    if hook_words.is_empty() {
        return Ok(CheckOutcome::pass("opening line has no comparable words"));
    }

    let min_ratio = ctx.thresholds.hook_overlap_ratio;
    let min_common = ctx.thresholds.hook_min_common_words;

    // (index, ratio, common) of the strongest overlap, and whether it repeats.
    let mut closest: Option<(usize, f64, usize)> = None;
    let mut repeated: Option<(usize, f64, usize)> = None;
    for (index, entry) in corpus.iter().enumerate() {
        let Some(entry_hook) = first_content_line(entry) else {
            continue;
        };
        let entry_words = word_set(entry_hook, MIN_WORD_CHARS);
        if entry_words.is_empty() {
            continue;
        }
        let common = hook_words.intersection(&entry_words).count();
        let ratio = common as f64 / hook_words.len().max(entry_words.len()) as f64;

        if closest.map_or(true, |(_, best, _)| ratio > best) {
            closest = Some((index, ratio, common));
        }
        if ratio > min_ratio
            && common > min_common
            && repeated.map_or(true, |(_, best, _)| ratio > best)
        {
            repeated = Some((index, ratio, common));
        }
    }

    match (repeated, closest) {
        (Some((index, ratio, common)), _) => Ok(CheckOutcome::fail(format!(
            "opening line repeats corpus entry #{index}: {common} shared words ({:.0}% overlap)",
            ratio * 100.0
        ))
        .with_payload(CheckPayload::HookOverlap {
            ratio,
            common_words: common,
            closest: Some(index),
        })),
        (None, Some((index, ratio, common))) => Ok(CheckOutcome::pass(format!(
            "opening line is fresh (closest overlap {:.0}%)",
            ratio * 100.0
        ))
        .with_payload(CheckPayload::HookOverlap {
            ratio,
            common_words: common,
            closest: Some(index),
        })),
        (None, None) => Ok(CheckOutcome::pass("corpus is empty; no repeated hooks possible")),
    }
}
