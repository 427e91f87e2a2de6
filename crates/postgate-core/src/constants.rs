/// Project-level config file name, looked up in the config root.
pub const CONFIG_FILE_NAME: &str = "postgate.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "POSTGATE_";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "POSTGATE_LOG";

/// Maximum characters of a corpus entry quoted back in messages.
pub const MAX_EXCERPT_CHARS: usize = 60;
