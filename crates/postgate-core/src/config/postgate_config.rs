//! Top-level postgate configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassificationConfig, CorpusConfig, EngineConfig, ThresholdConfig, Thresholds};
use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`POSTGATE_*`)
/// 2. Project config (`postgate.toml` in the config root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PostgateConfig {
    pub thresholds: ThresholdConfig,
    pub classification: ClassificationConfig,
    pub corpus: CorpusConfig,
    pub engine: EngineConfig,
}

impl PostgateConfig {
    /// Load configuration from `root` and the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration using `env` as the variable lookup. Lets tests
    /// exercise the env layer without touching the process environment.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config, env);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Resolved thresholds for the checks.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds.resolve()
    }

    /// Validate the configuration values.
    pub fn validate(config: &PostgateConfig) -> Result<(), ConfigError> {
        let t = &config.thresholds;
        let ratios = [
            ("thresholds.near_duplicate", t.near_duplicate),
            ("thresholds.max_similarity", t.max_similarity),
            ("thresholds.min_topic_coverage", t.min_topic_coverage),
            ("thresholds.hook_overlap_ratio", t.hook_overlap_ratio),
        ];
        for (field, value) in ratios {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if t.min_length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "thresholds.min_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if t.max_technical_chars == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "thresholds.max_technical_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.corpus.fetch_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "corpus.fetch_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(name) = config.classification.unknown_names().first() {
            return Err(ConfigError::InvalidValue {
                field: "classification".to_string(),
                message: format!("unknown check '{name}'"),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PostgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PostgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut PostgateConfig, other: &PostgateConfig) {
        // Thresholds
        let (b, o) = (&mut base.thresholds, &other.thresholds);
        if o.min_length.is_some() {
            b.min_length = o.min_length;
        }
        if o.near_duplicate.is_some() {
            b.near_duplicate = o.near_duplicate;
        }
        if o.max_similarity.is_some() {
            b.max_similarity = o.max_similarity;
        }
        if o.min_topic_coverage.is_some() {
            b.min_topic_coverage = o.min_topic_coverage;
        }
        if o.min_authenticity_signals.is_some() {
            b.min_authenticity_signals = o.min_authenticity_signals;
        }
        if o.max_technical_chars.is_some() {
            b.max_technical_chars = o.max_technical_chars;
        }
        if o.hook_overlap_ratio.is_some() {
            b.hook_overlap_ratio = o.hook_overlap_ratio;
        }
        if o.hook_min_common_words.is_some() {
            b.hook_min_common_words = o.hook_min_common_words;
        }

        // Classification
        if !other.classification.promote_to_blocking.is_empty() {
            base.classification.promote_to_blocking =
                other.classification.promote_to_blocking.clone();
        }
        if !other.classification.demote_to_warning.is_empty() {
            base.classification.demote_to_warning =
                other.classification.demote_to_warning.clone();
        }

        // Corpus
        if other.corpus.fetch_timeout_ms.is_some() {
            base.corpus.fetch_timeout_ms = other.corpus.fetch_timeout_ms;
        }

        // Engine
        if other.engine.parallel.is_some() {
            base.engine.parallel = other.engine.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `POSTGATE_MIN_LENGTH`, `POSTGATE_MAX_SIMILARITY`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides<F>(config: &mut PostgateConfig, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| env(&format!("{ENV_PREFIX}{name}"));
        let t = &mut config.thresholds;

        if let Some(v) = var("MIN_LENGTH").and_then(|v| v.parse().ok()) {
            t.min_length = Some(v);
        }
        if let Some(v) = var("NEAR_DUPLICATE").and_then(|v| v.parse().ok()) {
            t.near_duplicate = Some(v);
        }
        if let Some(v) = var("MAX_SIMILARITY").and_then(|v| v.parse().ok()) {
            t.max_similarity = Some(v);
        }
        if let Some(v) = var("MIN_TOPIC_COVERAGE").and_then(|v| v.parse().ok()) {
            t.min_topic_coverage = Some(v);
        }
        if let Some(v) = var("MIN_AUTHENTICITY_SIGNALS").and_then(|v| v.parse().ok()) {
            t.min_authenticity_signals = Some(v);
        }
        if let Some(v) = var("MAX_TECHNICAL_CHARS").and_then(|v| v.parse().ok()) {
            t.max_technical_chars = Some(v);
        }
        if let Some(v) = var("HOOK_OVERLAP_RATIO").and_then(|v| v.parse().ok()) {
            t.hook_overlap_ratio = Some(v);
        }
        if let Some(v) = var("HOOK_MIN_COMMON_WORDS").and_then(|v| v.parse().ok()) {
            t.hook_min_common_words = Some(v);
        }
        if let Some(v) = var("CORPUS_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.corpus.fetch_timeout_ms = Some(v);
        }
        if let Some(v) = var("PARALLEL").and_then(|v| v.parse().ok()) {
            config.engine.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
