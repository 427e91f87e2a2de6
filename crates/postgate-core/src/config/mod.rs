//! Configuration system for postgate.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod classification_config;
pub mod corpus_config;
pub mod defaults;
pub mod engine_config;
pub mod postgate_config;
pub mod threshold_config;

pub use classification_config::ClassificationConfig;
pub use corpus_config::CorpusConfig;
pub use engine_config::EngineConfig;
pub use postgate_config::PostgateConfig;
pub use threshold_config::{ThresholdConfig, Thresholds};
