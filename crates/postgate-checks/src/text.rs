//! Small text helpers shared by the checks.

use regex::Regex;
use rustc_hash::FxHashSet;

/// Longest line that can still be a section heading.
const MAX_HEADING_CHARS: usize = 60;

/// Words too common to say anything about a topic.
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "also", "been", "before", "being", "best", "both", "could",
    "does", "doing", "down", "each", "even", "every", "from", "have", "having", "here", "into",
    "just", "like", "make", "many", "more", "most", "much", "must", "only", "other", "over",
    "same", "should", "some", "such", "than", "that", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "under", "until", "very", "ways", "what", "when",
    "where", "which", "while", "will", "with", "without", "would", "your", "yours",
];

/// Lowercased alphanumeric words. Apostrophes stay inside a word.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|w| w.trim_matches(|c| c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Distinct words longer than `min_len` characters.
pub fn word_set(text: &str, min_len: usize) -> FxHashSet<String> {
    words(text).filter(|w| w.chars().count() > min_len).collect()
}

/// Topic keywords: at least four characters, stopwords removed, first
/// occurrence order kept.
pub fn keywords(topic: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words(topic)
        .filter(|w| w.chars().count() >= 4)
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Final word of a line, trailing punctuation stripped, lowercased.
pub fn last_word(line: &str) -> Option<String> {
    let word = line
        .split_whitespace()
        .last()?
        .trim_end_matches(|c: char| !c.is_alphanumeric());
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// Shorten `text` to at most `max` characters for quoting in a message.
pub fn excerpt(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// A run of lines under a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Heading line, empty for text before the first heading.
    pub heading: &'a str,
    pub lines: Vec<&'a str>,
}

impl Section<'_> {
    /// Characters in the section body, one separator per line break.
    pub fn char_len(&self) -> usize {
        let text: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        text + self.lines.len().saturating_sub(1)
    }
}

/// Whether `line` reads as a heading: short and either colon-terminated,
/// markdown-style, or matching `extra`.
pub fn is_heading(line: &str, extra: &Regex) -> bool {
    let line = line.trim();
    if line.is_empty() || line.chars().count() > MAX_HEADING_CHARS {
        return false;
    }
    line.ends_with(':') || line.starts_with("# ") || line.starts_with("## ") || extra.is_match(line)
}

/// Split `body` into sections at heading lines. A hashtag-only line closes
/// the current section; blank lines are dropped.
pub fn sections<'a>(
    body: &'a str,
    extra_heading: &Regex,
    hashtag_line: &Regex,
) -> Vec<Section<'a>> {
    let mut out = vec![Section {
        heading: "",
        lines: Vec::new(),
    }];
    for raw in body.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if hashtag_line.is_match(line) {
            out.push(Section {
                heading: "",
                lines: Vec::new(),
            });
        } else if is_heading(line, extra_heading) {
            out.push(Section {
                heading: line,
                lines: Vec::new(),
            });
        } else if let Some(current) = out.last_mut() {
            current.lines.push(line);
        }
    }
    out.retain(|s| !s.heading.is_empty() || !s.lines.is_empty());
    out
}
