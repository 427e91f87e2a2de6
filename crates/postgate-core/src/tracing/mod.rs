//! Observability setup for postgate.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod fields;
pub mod setup;

pub use setup::{init_tracing, init_tracing_json};
