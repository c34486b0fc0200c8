//! Error type for `config.ron` persistence.

use std::path::PathBuf;

/// Errors from loading or saving `config.ron`.
///
/// Filesystem and parse failures carry the offending path so a bad
/// `--config <dir>` is diagnosable from the message alone.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read from disk.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or `config.ron` could not be written.
    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.ron` does not parse as a growth/debug config.
    #[error("malformed config file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be rendered as RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
