//! The body must not be a near-verbatim copy of an accepted post.

use postgate_core::{CheckError, CheckOutcome, CheckPayload};
use postgate_similarity::{best_match, SimilarityClass, SimilarityThresholds};

use crate::context::{CheckContext, CorpusSnapshot};

pub fn check(ctx: &CheckContext<'_>) -> Result<CheckOutcome, CheckError> {
    let corpus = match ctx.corpus {
        CorpusSnapshot::Available(entries) => entries,
        CorpusSnapshot::Unavailable { reason } => {
            return Ok(CheckOutcome::pass(format!(
                "could not compare against corpus: {reason}"
            )))
        }
        CorpusSnapshot::NotRequested => {
            return Ok(CheckOutcome::pass("duplicate checking not requested"))
        }
    };
    let Some(closest) = best_match(ctx.body(), corpus) else {
        return Ok(CheckOutcome::pass("corpus is empty; no duplicates possible"));
    };

    let thresholds = SimilarityThresholds {
        near_duplicate: ctx.thresholds.near_duplicate,
        max_allowed: ctx.thresholds.max_similarity,
    };
    let class = thresholds.classify(closest.ratio);
    let payload = CheckPayload::Similarity {
        ratio: closest.ratio,
        closest: Some(closest.index),
        near_duplicate: class == SimilarityClass::NearDuplicate,
    };

    let (index, ratio) = (closest.index, closest.ratio);
    let outcome = if !thresholds.is_blocking(ratio) {
        let note = if class == SimilarityClass::NearDuplicate {
            " (near-duplicate)"
        } else {
            ""
        };
        CheckOutcome::pass(format!(
            "closest corpus entry #{index} at {ratio:.2} similarity{note}"
        ))
    } else if class == SimilarityClass::NearDuplicate {
        CheckOutcome::fail(format!(
            "near-duplicate of corpus entry #{index} ({ratio:.2} similarity)"
        ))
    } else {
        CheckOutcome::fail(format!(
            "too similar to corpus entry #{index} ({ratio:.2} similarity, maximum {:.2})",
            thresholds.max_allowed
        ))
    };
    Ok(outcome.with_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{body, run_with_corpus};

    fn corpus(entries: &[&str]) -> CorpusSnapshot {
        CorpusSnapshot::Available(entries.iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn normalized_copy_is_a_near_duplicate() {
        let post = body("We   automated our INVOICES.\nIt saved 6 hours.");
        let snapshot = corpus(&["Unrelated.", "we automated our invoices. it saved 6 hours."]);
        let out = run_with_corpus(check, &post, &snapshot);
        assert!(!out.passed);
        assert!(out.message.contains("near-duplicate"));
        assert_eq!(
            out.payload,
            Some(CheckPayload::Similarity {
                ratio: 1.0,
                closest: Some(1),
                near_duplicate: true
            })
        );
    }

    #[test]
    fn distinct_body_passes_with_score() {
        let post = body("Our clinic moved bookings online.");
        let out = run_with_corpus(check, &post, &corpus(&["Payroll is now one click for us."]));
        assert!(out.passed);
        assert!(matches!(
            out.payload,
            Some(CheckPayload::Similarity { near_duplicate: false, .. })
        ));
    }

    #[test]
    fn empty_corpus_passes_without_payload() {
        let out = run_with_corpus(check, &body("Anything."), &corpus(&[]));
        assert!(out.passed);
        assert!(out.payload.is_none());
    }

    #[test]
    fn unavailable_corpus_passes_open() {
        let snapshot = CorpusSnapshot::Unavailable {
            reason: "connection refused".into(),
        };
        let out = run_with_corpus(check, &body("Anything."), &snapshot);
        assert!(out.passed);
        assert!(out.message.contains("could not compare"));
    }
}
