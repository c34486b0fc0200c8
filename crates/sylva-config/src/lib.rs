//! Configuration for the Sylva generation tools.
//!
//! Runtime-configurable settings persisted as RON files, with CLI overrides
//! via clap. Loaded once per invocation; a generation run only ever sees an
//! immutable snapshot of these values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GrowthConfig};
pub use error::ConfigError;
