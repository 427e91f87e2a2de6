//! Regex pattern sets used by the checks, grouped by concern.
//!
//! Every pattern compiles lazily into `LazyLock<Option<Regex>>`. A pattern
//! that fails to compile stays `None`; the checks that need it return
//! `CheckError::PatternUnavailable` instead of panicking.

use postgate_core::errors::CheckError;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! text_pattern {
    ($(#[$meta:meta])* $name:ident, $regex_str:expr) => {
        $(#[$meta])*
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

/// Borrow a compiled pattern or fail with its name.
macro_rules! compiled {
    ($name:ident) => {
        $crate::patterns::require(&$name, stringify!($name))
    };
}

pub(crate) use compiled;

pub mod engagement;
pub mod leakage;
pub mod markers;
pub mod structure;
pub mod voice;

/// A named pattern, for health reporting.
pub type NamedPattern = (&'static str, &'static LazyLock<Option<Regex>>);

/// Borrow the compiled regex behind `pattern`.
pub fn require(
    pattern: &'static LazyLock<Option<Regex>>,
    name: &'static str,
) -> Result<&'static Regex, CheckError> {
    pattern.as_ref().ok_or_else(|| {
        tracing::warn!(pattern = name, "regex pattern failed to compile");
        CheckError::PatternUnavailable { pattern: name }
    })
}

/// Every pattern across all groups.
pub fn all_patterns() -> Vec<NamedPattern> {
    let mut all = Vec::new();
    all.extend(structure::all_patterns());
    all.extend(leakage::all_patterns());
    all.extend(voice::all_patterns());
    all.extend(markers::all_patterns());
    all.extend(engagement::all_patterns());
    all
}

/// Names of patterns that failed to compile. Forces compilation of all.
pub fn unhealthy_patterns() -> Vec<&'static str> {
    all_patterns()
        .into_iter()
        .filter(|(_, re)| re.is_none())
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(unhealthy_patterns(), Vec::<&str>::new());
    }

    #[test]
    fn pattern_names_are_unique() {
        let mut names: Vec<&str> = all_patterns().into_iter().map(|(n, _)| n).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
