//! Configuration loading, layering, and validation.

use std::collections::HashMap;

use postgate_core::config::{PostgateConfig, Thresholds};
use postgate_core::errors::ConfigError;
use postgate_core::models::{CheckId, Classification};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_reference_thresholds() {
    let t = Thresholds::default();
    assert_eq!(t.min_length, 300);
    assert_eq!(t.near_duplicate, 0.85);
    assert_eq!(t.max_similarity, 0.75);
    assert_eq!(t.min_topic_coverage, 0.3);
    assert_eq!(t.min_authenticity_signals, 3);
    assert_eq!(t.max_technical_chars, 600);
    assert_eq!(t.hook_overlap_ratio, 0.5);
    assert_eq!(t.hook_min_common_words, 3);
}

#[test]
fn from_toml_overrides_only_given_values() {
    let config = PostgateConfig::from_toml(
        r#"
        [thresholds]
        min_length = 500
        max_similarity = 0.6
        "#,
    )
    .unwrap();
    let t = config.thresholds();
    assert_eq!(t.min_length, 500);
    assert_eq!(t.max_similarity, 0.6);
    assert_eq!(t.near_duplicate, 0.85);
}

#[test]
fn ratio_out_of_range_is_rejected() {
    let err = PostgateConfig::from_toml("[thresholds]\nnear_duplicate = 1.5\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "thresholds.near_duplicate")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_timeout_is_rejected() {
    let err = PostgateConfig::from_toml("[corpus]\nfetch_timeout_ms = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_check_name_is_rejected() {
    let err = PostgateConfig::from_toml(
        "[classification]\npromote_to_blocking = [\"not_a_check\"]\n",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let err = PostgateConfig::from_toml("[thresholds\nmin_length = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn project_file_then_env_layering() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("postgate.toml"),
        "[thresholds]\nmin_length = 400\nmin_topic_coverage = 0.5\n[engine]\nparallel = true\n",
    )
    .unwrap();

    let config = PostgateConfig::load_with_env(
        dir.path(),
        env_from(&[("POSTGATE_MIN_LENGTH", "250"), ("POSTGATE_CORPUS_TIMEOUT_MS", "750")]),
    )
    .unwrap();

    assert_eq!(config.thresholds.effective_min_length(), 250);
    assert_eq!(config.thresholds.effective_min_topic_coverage(), 0.5);
    assert_eq!(
        config.corpus.effective_fetch_timeout(),
        std::time::Duration::from_millis(750)
    );
    assert!(config.engine.effective_parallel());
}

#[test]
fn hook_thresholds_follow_env_over_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("postgate.toml"),
        "[thresholds]\nhook_overlap_ratio = 0.7\nhook_min_common_words = 5\n",
    )
    .unwrap();

    let config = PostgateConfig::load_with_env(
        dir.path(),
        env_from(&[
            ("POSTGATE_HOOK_OVERLAP_RATIO", "0.4"),
            ("POSTGATE_HOOK_MIN_COMMON_WORDS", "2"),
        ]),
    )
    .unwrap();

    let t = config.thresholds();
    assert_eq!(t.hook_overlap_ratio, 0.4);
    assert_eq!(t.hook_min_common_words, 2);

    let result = PostgateConfig::load_with_env(
        dir.path(),
        env_from(&[("POSTGATE_HOOK_OVERLAP_RATIO", "1.5")]),
    );
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn unparsable_env_values_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        PostgateConfig::load_with_env(dir.path(), env_from(&[("POSTGATE_MIN_LENGTH", "lots")]))
            .unwrap();
    assert_eq!(config.thresholds.effective_min_length(), 300);
}

#[test]
fn env_values_are_validated_too() {
    let dir = tempfile::tempdir().unwrap();
    let result = PostgateConfig::load_with_env(
        dir.path(),
        env_from(&[("POSTGATE_MAX_SIMILARITY", "2.0")]),
    );
    assert!(result.is_err());
}

#[test]
fn missing_project_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PostgateConfig::load_with_env(dir.path(), |_| None).unwrap();
    assert_eq!(config, PostgateConfig::default());
}

#[test]
fn toml_round_trip_preserves_values() {
    let mut config = PostgateConfig::default();
    config.thresholds.min_length = Some(420);
    config.classification.promote_to_blocking = vec!["hook_completeness".to_string()];
    let text = config.to_toml().unwrap();
    let back = PostgateConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn classification_overrides_apply() {
    let config = PostgateConfig::from_toml(
        "[classification]\n\
         promote_to_blocking = [\"hook_completeness\"]\n\
         demote_to_warning = [\"call_to_action\"]\n",
    )
    .unwrap();
    let c = &config.classification;
    assert_eq!(
        c.effective(CheckId::HookCompleteness, Classification::Warning),
        Classification::Blocking
    );
    assert_eq!(
        c.effective(CheckId::CallToAction, Classification::Blocking),
        Classification::Warning
    );
    assert_eq!(
        c.effective(CheckId::Truncation, Classification::Blocking),
        Classification::Blocking
    );
}
