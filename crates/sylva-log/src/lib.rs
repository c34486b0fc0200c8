//! Structured logging for the Sylva tools.
//!
//! Console logging via the `tracing` ecosystem: timestamps, module paths,
//! and severity levels, filterable through `RUST_LOG` or the config file's
//! `debug.log_level` setting.

use sylva_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Filter precedence: `RUST_LOG` environment variable, then the config's
/// `debug.log_level`, then `info`.
pub fn init_logging(config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Directive used when `RUST_LOG` is unset: the config's `debug.log_level`
/// if present and non-empty, otherwise `info`.
fn filter_directive(config: Option<&Config>) -> &str {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => &config.debug.log_level,
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_level_is_used() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug");
    }

    #[test]
    fn test_missing_or_empty_level_falls_back_to_info() {
        assert_eq!(filter_directive(None), "info");

        let mut config = Config::default();
        config.debug.log_level = String::new();
        assert_eq!(filter_directive(Some(&config)), "info");
    }

    #[test]
    fn test_directive_parses_as_env_filter() {
        let filter = EnvFilter::new(filter_directive(None));
        assert_eq!(filter.to_string(), "info");
    }
}
