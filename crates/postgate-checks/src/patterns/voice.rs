//! Voice and specificity: generic openings, dangling hooks, personal
//! language, concrete detail.

use regex::Regex;
use std::sync::LazyLock;

use super::NamedPattern;

text_pattern!(
    /// Templated openings seen across generated posts.
    RE_GENERIC_OPENING,
    r"(?i)^(?:most (?:business owners|small businesses|businesses|people|companies|entrepreneurs|founders|teams|leaders|marketers|agencies)\b|here['’]?s (?:what|why|the (?:truth|thing|secret|problem))\b|let['’]?s talk about\b|in today['’]?s\b|are you (?:still|struggling|tired)\b|did you know\b|stop (?:doing|wasting|making)\b|the (?:secret|truth|key) (?:to|about)\b|ever wonder(?:ed)?\b|imagine (?:if|a world|this)\b|what if i told you\b|everyone(?: is|['’]s) talking about\b|(?:unpopular|hot) (?:opinion|take)\b|nobody talks about\b|(?:automation|ai) is (?:changing|transforming)\b)"
);

text_pattern!(
    /// Opening transition word that needs a continuation.
    RE_INCOMPLETE_THOUGHT,
    r"(?i)^(?:and|but|so|because|when|if|while|although|though|since|which|or|then|also|plus|until|unless|whether)\b"
);

text_pattern!(
    /// Terminal punctuation, allowing closing quotes and trailing emoji.
    RE_TERMINAL_PUNCTUATION,
    r#"[.!?:…]["'”’)]*\s*(?:[\p{So}\p{Sk}\x{FE0F}\x{200D}]\s*)*$"#
);

text_pattern!(
    /// A number with a unit: "11 hours", "40%", "3x", "200 leads".
    RE_SPECIFIC_QUANTITY,
    r"(?i)\b\d+(?:[.,]\d+)?\s*(?:%|percent\b|x\b|k\b|hours?\b|hrs?\b|minutes?\b|mins?\b|seconds?\b|days?\b|weeks?\b|months?\b|years?\b|clients?\b|customers?\b|people\b|leads?\b|deals?\b|calls?\b|emails?\b|invoices?\b|orders?\b|tools?\b|employees?\b|users?\b)"
);

text_pattern!(
    /// A currency amount.
    RE_MONEY,
    r"[$€£]\s?\d"
);

text_pattern!(
    /// Two capitalised words in a row: a name, a company, a product.
    RE_PROPER_NOUN_PAIR,
    r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b"
);

text_pattern!(
    /// Conversational contractions. "Here's" is deliberately absent: it is
    /// part of the templated openings.
    RE_CONTRACTION,
    r"(?i)\b(?:i['’](?:m|ve|d|ll)|we['’](?:re|ve|d|ll)|you['’](?:re|ve|d|ll)|they['’](?:re|ve|d|ll)|it['’]s|that['’]s|(?:do|does|did|is|was|were|are|has|have|had|could|should|would|need)n['’]t|can['’]t|won['’]t)\b"
);

text_pattern!(
    RE_FIRST_PERSON,
    r"(?i)\b(?:i|me|my|mine|myself|we|us|our|ours|ourselves)\b"
);

text_pattern!(
    /// Admitting something was hard or went wrong.
    RE_DIFFICULTY,
    r"(?i)\b(?:mistakes?|failed|failure|struggled|struggling|wrong|hard part|harder than|didn['’]t work|wasn['’]t (?:perfect|easy)|broke|messed up|the hard way|took (?:me|us) \w+|frustrating|painful|honestly)\b"
);

text_pattern!(
    /// Tools and business objects that make a post concrete.
    RE_CONCRETE_NOUN,
    r"(?i)\b(?:spreadsheets?|crm|invoices?|inbox|calendar|zapier|make\.com|n8n|hubspot|salesforce|slack|notion|airtable|gmail|excel|google sheets|dashboards?|clients?|customers?|workflows?|emails?|proposals?|contracts?|pipelines?|quotes?|tickets?|forms?|api|webhooks?)\b"
);

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        ("RE_GENERIC_OPENING", &RE_GENERIC_OPENING),
        ("RE_INCOMPLETE_THOUGHT", &RE_INCOMPLETE_THOUGHT),
        ("RE_TERMINAL_PUNCTUATION", &RE_TERMINAL_PUNCTUATION),
        ("RE_SPECIFIC_QUANTITY", &RE_SPECIFIC_QUANTITY),
        ("RE_MONEY", &RE_MONEY),
        ("RE_PROPER_NOUN_PAIR", &RE_PROPER_NOUN_PAIR),
        ("RE_CONTRACTION", &RE_CONTRACTION),
        ("RE_FIRST_PERSON", &RE_FIRST_PERSON),
        ("RE_DIFFICULTY", &RE_DIFFICULTY),
        ("RE_CONCRETE_NOUN", &RE_CONCRETE_NOUN),
    ]
}
