use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Generation-mode flags that switch on stricter rules for some checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModeFlag {
    /// Post showcases an automation; checked for wall-of-process text.
    AutomationShowcase,
    /// Post is instructional regardless of how the topic is worded.
    Tutorial,
}

impl ModeFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutomationShowcase => "AUTOMATION_SHOWCASE",
            Self::Tutorial => "TUTORIAL",
        }
    }
}

impl std::fmt::Display for ModeFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated post awaiting acceptance.
///
/// The body is never mutated during validation; checkers only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePost {
    pub title: String,
    /// Full rendered text, closing hashtags included.
    pub body: String,
    /// Free-text subject used to seed generation. May be empty.
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub mode_flags: BTreeSet<ModeFlag>,
}

impl CandidatePost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            topic: String::new(),
            mode_flags: BTreeSet::new(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_mode(mut self, flag: ModeFlag) -> Self {
        self.mode_flags.insert(flag);
        self
    }

    pub fn has_mode(&self, flag: ModeFlag) -> bool {
        self.mode_flags.contains(&flag)
    }

    /// The opening line: first line of the body with visible text.
    pub fn hook(&self) -> Option<&str> {
        first_content_line(&self.body)
    }
}

/// First non-blank line of `text`, trimmed.
pub fn first_content_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}
