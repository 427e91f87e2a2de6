//! ValidationEngine: implements IPostValidator over the check table.

use std::sync::Arc;
use std::time::Instant;

use postgate_checks::patterns::unhealthy_patterns;
use postgate_checks::{registry, CheckContext, CheckDescriptor, CorpusSnapshot};
use postgate_core::errors::error_code;
use postgate_core::tracing::fields::VALIDATE_SPAN;
use postgate_core::{
    CandidatePost, ICorpusSource, IPostValidator, PostgateConfig, PostgateErrorCode, Thresholds,
    ValidationResult,
};

use crate::aggregate::aggregate;
use crate::corpus::CorpusFetcher;
use crate::phase::{PhaseTracker, ValidationPhase};
use crate::runner::run_all;

/// Stateless between calls: configuration and the check table are fixed at
/// construction, and every call builds its own corpus snapshot.
pub struct ValidationEngine {
    config: PostgateConfig,
    thresholds: Thresholds,
    checks: Vec<CheckDescriptor>,
    corpus: Option<CorpusFetcher>,
}

impl ValidationEngine {
    pub fn new(config: PostgateConfig) -> Self {
        let broken = unhealthy_patterns();
        if !broken.is_empty() {
            tracing::error!(
                patterns = ?broken,
                code = error_code::PATTERN_UNAVAILABLE,
                "patterns failed to compile; checks using them will report faults"
            );
        }
        Self {
            thresholds: config.thresholds(),
            config,
            checks: registry().to_vec(),
            corpus: None,
        }
    }

    /// Attach the collaborator that supplies accepted posts.
    pub fn with_corpus_source(mut self, source: Arc<dyn ICorpusSource>) -> Self {
        self.corpus = Some(CorpusFetcher::new(source));
        self
    }

    /// Replace the check table.
    pub fn with_checks(mut self, checks: Vec<CheckDescriptor>) -> Self {
        self.checks = checks;
        self
    }

    pub fn config(&self) -> &PostgateConfig {
        &self.config
    }

    pub fn checks(&self) -> &[CheckDescriptor] {
        &self.checks
    }

    /// Run every eligible check and return the complete verdict.
    ///
    /// With `check_duplicates`, the corpus is fetched once for this call;
    /// an unavailable corpus makes the duplicate checks pass.
    pub fn validate(&self, post: &CandidatePost, check_duplicates: bool) -> ValidationResult {
        let corpus = if check_duplicates {
            self.snapshot_corpus()
        } else {
            CorpusSnapshot::NotRequested
        };
        self.evaluate(post, check_duplicates, &corpus)
    }

    /// Validate against an explicit corpus snapshot. Duplicate checks run.
    pub fn validate_with_corpus(
        &self,
        post: &CandidatePost,
        corpus: &[String],
    ) -> ValidationResult {
        let snapshot = CorpusSnapshot::Available(corpus.to_vec());
        self.evaluate(post, true, &snapshot)
    }

    /// Fetch the corpus once for this call. Failures fail open.
    fn snapshot_corpus(&self) -> CorpusSnapshot {
        let Some(fetcher) = &self.corpus else {
            tracing::warn!(
                code = error_code::CORPUS_UNAVAILABLE,
                "no corpus source configured"
            );
            return CorpusSnapshot::Unavailable {
                reason: "no corpus source configured".to_string(),
            };
        };
        let timeout = self.config.corpus.effective_fetch_timeout();
        match fetcher.fetch(timeout) {
            Ok(entries) => CorpusSnapshot::Available(entries),
            Err(err) => {
                tracing::warn!(
                    source = fetcher.source_name(),
                    code = err.error_code(),
                    error = %err,
                    "corpus unavailable, duplicate checks pass by default"
                );
                CorpusSnapshot::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn evaluate(
        &self,
        post: &CandidatePost,
        check_duplicates: bool,
        corpus: &CorpusSnapshot,
    ) -> ValidationResult {
        let span = tracing::info_span!(VALIDATE_SPAN, title = %post.title, check_duplicates);
        let _guard = span.enter();
        let started = Instant::now();
        let mut phase = PhaseTracker::new();

        phase.advance();
        let eligible: Vec<&CheckDescriptor> = self
            .checks
            .iter()
            .filter(|d| d.is_eligible(post, check_duplicates))
            .collect();
        let ctx = CheckContext::new(post, &self.thresholds, corpus);
        let executed = run_all(&eligible, &ctx, self.config.engine.effective_parallel());

        phase.advance();
        let result = aggregate(executed, &self.config.classification);

        phase.advance();
        debug_assert_eq!(phase.current(), ValidationPhase::Done);
        tracing::info!(
            passes = result.passes(),
            issues = result.issues().len(),
            warnings = result.warnings().len(),
            checks = result.details().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "validation complete"
        );
        result
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(PostgateConfig::default())
    }
}

impl IPostValidator for ValidationEngine {
    fn validate(&self, post: &CandidatePost, check_duplicates: bool) -> ValidationResult {
        ValidationEngine::validate(self, post, check_duplicates)
    }
}
