//! Detectable artifacts of machine-generated text.

use regex::Regex;
use std::sync::LazyLock;

use super::NamedPattern;

text_pattern!(
    /// A line that opens and closes with an emoji around some text.
    RE_EMOJI_BRACKETED,
    r"^\p{Extended_Pictographic}\x{FE0F}?\s*.*\p{L}.*?\s*\p{Extended_Pictographic}\x{FE0F}?$"
);

text_pattern!(
    RE_RIGID_TRANSITION,
    r"(?i)\b(?:in conclusion|without further ado|it['’]s (?:important|worth) (?:to note|noting)|let['’]s dive (?:in|into)|dive deep into|in summary|to sum up|in the ever[- ]evolving|in today['’]s (?:fast[- ]paced|digital) (?:world|landscape)|at the end of the day|buckle up|furthermore|moreover)\b"
);

text_pattern!(
    RE_CORPORATE_JARGON,
    r"(?i)\b(?:synerg(?:y|ies|ize)|leverag(?:e|es|ed|ing)|paradigm shift|unlock(?:ing)? (?:the )?(?:power|potential)|delve|holistic|seamless(?:ly)?|cutting[- ]edge|best[- ]in[- ]class|game[- ]changer|revolutioni[sz]e|empower(?:s|ing)?|tapestry|navigate the (?:complexities|landscape)|thought leadership|move the needle|circle back)\b"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        ("RE_EMOJI_BRACKETED", &RE_EMOJI_BRACKETED),
        ("RE_RIGID_TRANSITION", &RE_RIGID_TRANSITION),
        ("RE_CORPORATE_JARGON", &RE_CORPORATE_JARGON),
    ]
}
