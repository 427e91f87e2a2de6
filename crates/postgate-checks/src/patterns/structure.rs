//! Line-shape patterns: truncated words, label lines, numbered steps, sections.

use regex::Regex;
use std::sync::LazyLock;

use super::NamedPattern;

text_pattern!(
    /// Word endings that are fragments of longer words ("actu" from "actually").
    /// Applied to a lowercased word with trailing punctuation stripped.
    /// Besides the literal stems: a long word ending in "ng" ("challeng"),
    /// a consonant plus "l" ("exampl", "exactl"), or a cluster that English
    /// words rarely end on ("developm", "knowledg", "helpf").
    RE_INCOMPLETE_STEM,
    r"(?:\w{5,}ng|\w{3,}[bcdfgkpt]l|\w{3,}(?:pm|nm|dg|sf|pf|tf|wl)|actu|reali|basica|probab|definit|necessar|immedia|eventu|especi|usua|typica|specifi|signifi|automa|busine|proce|manag|strateg|operat|compan|custome|integrat|optimi|implemen|develo|experie|informa|recomme|communi|produc|particu|efficie|consiste|importa|differe|traditio|frustrat|complet|situat|conversat|opportun|relationsh|understa|individu|technolo)$"
);

text_pattern!(
    /// Ordinary English endings. Takes precedence over a stem match.
    RE_VALID_ENDING,
    r"(?:ly|tion|sion|ing|ness|ment|able|ible|ful|less|ous|ive|ed|er|est|al|ity|ance|ence|ism|ist|ship|ize|ise|ate|ure)$"
);

text_pattern!(
    /// Short decorative label lines: led by a symbol glyph, or ending in a colon.
    RE_DECORATIVE_LABEL,
    r"^[\p{So}\p{Sm}•▪►▶]|:$"
);

text_pattern!(
    /// A line made only of hashtags.
    RE_HASHTAG_LINE,
    r"^(?:#[\p{L}\p{N}_]+\s*)+$"
);

text_pattern!(
    /// Numbered step at line start: "1. ", "2) ", "Step 3: ", keycap "4️⃣".
    RE_NUMBERED_STEP,
    r"(?i)^\s*(?:step\s+)?(\d{1,2})(?:[.):]\s+|\x{FE0F}?\x{20E3}\s*)\S"
);

text_pattern!(
    /// List item at line start.
    RE_LIST_ITEM,
    r"^\s*(?:[-*•→▪►]\s|\d{1,2}[.)]\s|\d\x{FE0F}?\x{20E3})"
);

text_pattern!(
    /// Heading of a "how it works" style section.
    RE_TECH_SECTION_HEADER,
    r"(?i)\b(?:how it works|how this works|under the hood|behind the scenes|the (?:tech|technical) (?:stack|setup|side)|the workflow|the setup)\b"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        ("RE_INCOMPLETE_STEM", &RE_INCOMPLETE_STEM),
        ("RE_VALID_ENDING", &RE_VALID_ENDING),
        ("RE_DECORATIVE_LABEL", &RE_DECORATIVE_LABEL),
        ("RE_HASHTAG_LINE", &RE_HASHTAG_LINE),
        ("RE_NUMBERED_STEP", &RE_NUMBERED_STEP),
        ("RE_LIST_ITEM", &RE_LIST_ITEM),
        ("RE_TECH_SECTION_HEADER", &RE_TECH_SECTION_HEADER),
    ]
}
