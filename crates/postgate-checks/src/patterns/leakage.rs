//! Template and scaffolding leakage: unfilled variables, framework labels,
//! placeholder examples.

use regex::Regex;
use std::sync::LazyLock;

use super::NamedPattern;

text_pattern!(
    /// `{identifier}`. The "not followed by `}`" rule is applied by the caller.
    RE_PLACEHOLDER,
    r"\{([A-Za-z_][A-Za-z0-9_]*)\}"
);

text_pattern!(
    /// Copywriting-framework markers left in the output.
    RE_INTERNAL_LABEL,
    r"\[(?:PROBLEM|AGITATE|AGITATION|SOLUTION|BRIDGE|BEFORE|AFTER|HOOK|CTA|INSIGHT|STORY|LESSON|CONTEXT|RESULT|PROOF|INTRO|OUTRO)\]|\[STEP[^\]\n]{0,20}\]?"
);

text_pattern!(
    /// Line that introduces an example.
    RE_EXAMPLE_HEADER,
    r"(?i)\b(?:for example|examples?|e\.g\.|for instance|case study|real[- ]world)\b"
);

text_pattern!(
    /// Placeholder shapes inside examples: [Client Name], <company>, {metric}, $X, X%.
    RE_EXAMPLE_PLACEHOLDER,
    r"\[[A-Za-z][^\]\n]{0,40}\]|<[A-Za-z][^>\n]{0,40}>|\{[^{}\n]{1,40}\}|\$X{1,3}\b|\bX{1,3}%"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        ("RE_PLACEHOLDER", &RE_PLACEHOLDER),
        ("RE_INTERNAL_LABEL", &RE_INTERNAL_LABEL),
        ("RE_EXAMPLE_HEADER", &RE_EXAMPLE_HEADER),
        ("RE_EXAMPLE_PLACEHOLDER", &RE_EXAMPLE_PLACEHOLDER),
    ]
}
