use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Optional structured payload attached to a check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckPayload {
    /// Offending tokens, sorted and de-duplicated.
    Tokens { items: Vec<String> },
    Length { chars: usize, minimum: usize },
    Coverage {
        ratio: f64,
        matched: Vec<String>,
        missing: Vec<String>,
    },
    Signals {
        total: u32,
        breakdown: BTreeMap<String, u32>,
    },
    Similarity {
        ratio: f64,
        closest: Option<usize>,
        near_duplicate: bool,
    },
    HookOverlap {
        ratio: f64,
        common_words: usize,
        closest: Option<usize>,
    },
    /// The check itself failed; holds the error text.
    Fault { error: String },
}

impl CheckPayload {
    /// Build a `Tokens` payload, sorting and removing duplicates.
    pub fn tokens<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Self::Tokens { items }
    }
}

/// Result of one heuristic check. `message` is populated on pass too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<CheckPayload>,
}

impl CheckOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            payload: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: CheckPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Tokens carried by a `Tokens` payload, empty otherwise.
    pub fn tokens(&self) -> &[String] {
        match &self.payload {
            Some(CheckPayload::Tokens { items }) => items,
            _ => &[],
        }
    }
}
