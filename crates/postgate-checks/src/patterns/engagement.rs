//! Reader engagement: calls to action and instructional structure.

use regex::Regex;
use std::sync::LazyLock;

use super::NamedPattern;

text_pattern!(
    RE_CALL_TO_ACTION,
    r"(?i)\b(?:comment|comments|share|dm|dm me|message me|send me|book a (?:call|demo|meeting)|schedule a (?:call|demo)|reply|let me know|drop (?:a|your|me)|tell me|follow (?:me|for|along)|repost|save this|link in (?:bio|comments)|click|sign up|subscribe|reach out|grab (?:the|my|your)|download|what['’]s your|what do you think)\b|\bthoughts\?"
);

text_pattern!(
    /// Topic wording that promises instructions.
    RE_HOW_TO_TOPIC,
    r"(?i)\bhow[- ]to\b|\bstep[- ]by[- ]step\b|\btutorial\b|\bguide\b"
);

text_pattern!(
    /// Evidence of instructions in the body: list items or sequencing phrases.
    RE_INSTRUCTIONAL,
    r"(?im)^\s*(?:step\s*\d|\d{1,2}[.)]\s|\d\x{FE0F}?\x{20E3}|[-*•→]\s)|\b(?:here['’]s how|first,|next,|then,|finally,|start by|to do this)"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        ("RE_CALL_TO_ACTION", &RE_CALL_TO_ACTION),
        ("RE_HOW_TO_TOPIC", &RE_HOW_TO_TOPIC),
        ("RE_INSTRUCTIONAL", &RE_INSTRUCTIONAL),
    ]
}
