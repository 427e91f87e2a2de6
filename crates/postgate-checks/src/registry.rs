//! Ordered table of check descriptors.

use postgate_core::{CandidatePost, CheckError, CheckId, CheckOutcome, Classification, ModeFlag};

use crate::checks;
use crate::context::CheckContext;

/// Signature every check implements.
pub type CheckFn = fn(&CheckContext<'_>) -> Result<CheckOutcome, CheckError>;

/// When a check is eligible to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    /// Only when the post carries this mode flag.
    Mode(ModeFlag),
    /// Only when duplicate checking is requested.
    Corpus,
}

/// One row of the check table.
#[derive(Clone, Copy)]
pub struct CheckDescriptor {
    pub id: CheckId,
    /// Built-in classification; configuration may override it.
    pub classification: Classification,
    pub requirement: Requirement,
    pub run: CheckFn,
}

impl CheckDescriptor {
    pub const fn new(
        id: CheckId,
        classification: Classification,
        requirement: Requirement,
        run: CheckFn,
    ) -> Self {
        Self {
            id,
            classification,
            requirement,
            run,
        }
    }

    /// Whether this check produces a `details` entry for the call.
    pub fn is_eligible(&self, post: &CandidatePost, check_duplicates: bool) -> bool {
        match self.requirement {
            Requirement::Always => true,
            Requirement::Mode(flag) => post.has_mode(flag),
            Requirement::Corpus => check_duplicates,
        }
    }
}

impl std::fmt::Debug for CheckDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDescriptor")
            .field("id", &self.id)
            .field("classification", &self.classification)
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

use checks::*;
use Classification::{Blocking, Warning};
use Requirement::{Always, Corpus, Mode};

static REGISTRY: [CheckDescriptor; 15] = [
    CheckDescriptor::new(CheckId::ContentLength, Blocking, Always, content_length::check),
    CheckDescriptor::new(CheckId::Truncation, Blocking, Always, truncation::check),
    CheckDescriptor::new(CheckId::Placeholders, Blocking, Always, placeholders::check),
    CheckDescriptor::new(CheckId::InternalLabels, Blocking, Always, internal_labels::check),
    CheckDescriptor::new(CheckId::HookCompleteness, Warning, Always, hook_completeness::check),
    CheckDescriptor::new(CheckId::HookAuthenticity, Blocking, Always, hook_authenticity::check),
    CheckDescriptor::new(CheckId::AiMarkers, Blocking, Always, ai_markers::check),
    CheckDescriptor::new(CheckId::CallToAction, Blocking, Always, call_to_action::check),
    CheckDescriptor::new(CheckId::TopicRelevance, Blocking, Always, topic_relevance::check),
    CheckDescriptor::new(CheckId::ExampleQuality, Blocking, Always, example_quality::check),
    CheckDescriptor::new(CheckId::StepCompleteness, Blocking, Always, step_completeness::check),
    // Warning: filler text scores zero here and must fail on the CTA alone.
    CheckDescriptor::new(
        CheckId::AuthenticitySignals,
        Warning,
        Always,
        authenticity_signals::check,
    ),
    CheckDescriptor::new(
        CheckId::TechnicalDetail,
        Blocking,
        Mode(ModeFlag::AutomationShowcase),
        technical_detail::check,
    ),
    CheckDescriptor::new(CheckId::HookRepetition, Blocking, Corpus, hook_repetition::check),
    CheckDescriptor::new(CheckId::CorpusSimilarity, Blocking, Corpus, corpus_similarity::check),
];

/// The default checks, in the order issues and warnings are reported.
pub fn registry() -> &'static [CheckDescriptor] {
    &REGISTRY
}
