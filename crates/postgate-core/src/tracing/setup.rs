//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "postgate=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize human-readable logging to stderr.
///
/// Reads `POSTGATE_LOG` for per-crate levels, e.g.
/// `POSTGATE_LOG=postgate_engine=debug,postgate_checks=trace`.
/// Falls back to `postgate=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .try_init();
    });
}

/// Initialize structured JSON logging to stderr. Same filter rules as
/// [`init_tracing`], and shares its once-guard.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .try_init();
    });
}
