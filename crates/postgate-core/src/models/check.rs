use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifiers for every check the pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    ContentLength,
    Truncation,
    Placeholders,
    InternalLabels,
    HookCompleteness,
    HookAuthenticity,
    AiMarkers,
    CallToAction,
    TopicRelevance,
    ExampleQuality,
    StepCompleteness,
    AuthenticitySignals,
    TechnicalDetail,
    HookRepetition,
    CorpusSimilarity,
}

impl CheckId {
    /// Stable snake_case name, used as the `details` key and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentLength => "content_length",
            Self::Truncation => "truncation",
            Self::Placeholders => "placeholders",
            Self::InternalLabels => "internal_labels",
            Self::HookCompleteness => "hook_completeness",
            Self::HookAuthenticity => "hook_authenticity",
            Self::AiMarkers => "ai_markers",
            Self::CallToAction => "call_to_action",
            Self::TopicRelevance => "topic_relevance",
            Self::ExampleQuality => "example_quality",
            Self::StepCompleteness => "step_completeness",
            Self::AuthenticitySignals => "authenticity_signals",
            Self::TechnicalDetail => "technical_detail",
            Self::HookRepetition => "hook_repetition",
            Self::CorpusSimilarity => "corpus_similarity",
        }
    }

    /// Human label prefixed to issue and warning messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContentLength => "Content length",
            Self::Truncation => "Truncation",
            Self::Placeholders => "Placeholders",
            Self::InternalLabels => "Internal labels",
            Self::HookCompleteness => "Hook completeness",
            Self::HookAuthenticity => "Hook authenticity",
            Self::AiMarkers => "AI markers",
            Self::CallToAction => "CTA",
            Self::TopicRelevance => "Topic relevance",
            Self::ExampleQuality => "Examples",
            Self::StepCompleteness => "Steps",
            Self::AuthenticitySignals => "Authenticity",
            Self::TechnicalDetail => "Technical detail",
            Self::HookRepetition => "Hook repetition",
            Self::CorpusSimilarity => "Duplicate",
        }
    }

    pub fn all() -> &'static [CheckId] {
        &[
            Self::ContentLength,
            Self::Truncation,
            Self::Placeholders,
            Self::InternalLabels,
            Self::HookCompleteness,
            Self::HookAuthenticity,
            Self::AiMarkers,
            Self::CallToAction,
            Self::TopicRelevance,
            Self::ExampleQuality,
            Self::StepCompleteness,
            Self::AuthenticitySignals,
            Self::TechnicalDetail,
            Self::HookRepetition,
            Self::CorpusSimilarity,
        ]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown check '{s}'"))
    }
}

/// Whether a failing check rejects the post or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Blocking,
    Warning,
}
