//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Sylva command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "sylva", about = "Sylva tree generator")]
pub struct CliArgs {
    /// Starting symbol string.
    #[arg(long)]
    pub axiom: Option<String>,

    /// Number of rewrite passes.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Turn magnitude in degrees.
    #[arg(long)]
    pub angle: Option<f32>,

    /// Foliage/fauna spawn probability (0.0 - 1.0).
    #[arg(long)]
    pub leaf_density: Option<f32>,

    /// RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Carry nesting depth into bracket snapshots.
    #[arg(long)]
    pub propagate_depth: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref axiom) = args.axiom {
            self.growth.axiom = axiom.clone();
        }
        if let Some(iterations) = args.iterations {
            self.growth.iterations = iterations;
        }
        if let Some(angle) = args.angle {
            self.growth.angle_degrees = angle;
        }
        if let Some(density) = args.leaf_density {
            self.growth.leaf_density = density;
        }
        if let Some(seed) = args.seed {
            self.growth.seed = seed;
        }
        if let Some(propagate) = args.propagate_depth {
            self.growth.propagate_depth = propagate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            axiom: Some("BFFA".to_string()),
            seed: Some(7),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.growth.axiom, "BFFA");
        assert_eq!(config.growth.seed, 7);
        // Non-overridden fields retain defaults
        assert_eq!(config.growth.iterations, 3);
        assert_eq!(config.growth.angle_degrees, 45.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
