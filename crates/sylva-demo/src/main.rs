//! Demo binary that grows one tree and reports the placement streams.
//!
//! Configuration is loaded from `config.ron` in the working directory (or
//! `--config <dir>`) and can be overridden via CLI flags.
//! Run with `cargo run -p sylva-demo`.
//! Run with `cargo run -p sylva-demo -- --iterations 2 --seed 7` to override.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec3;
use sylva_config::{CliArgs, Config};
use sylva_tree::{GrowthParams, branching_tree, grow};
use sylva_turtle::{DepthSnapshot, GeometryInstance, MeshTemplate, TemplateSet};
use tracing::{error, info};

/// Template metadata standing in for the external mesh loader.
///
/// Heights and recenter offsets match the stock cylinder/leaf/crow meshes;
/// raw vertex data never enters the generation core.
fn stock_templates() -> TemplateSet {
    let cylinder = MeshTemplate::with_center_offset(1.0, Vec3::new(-0.25, 0.0, -0.25));
    TemplateSet {
        trunk: cylinder,
        branch: MeshTemplate::new(1.0),
        leaf: MeshTemplate::with_center_offset(1.0, Vec3::new(0.0, -130.0, 0.0)),
        bird: MeshTemplate::new(1.0),
        base: MeshTemplate::new(1.0),
    }
}

fn growth_params(config: &Config) -> GrowthParams {
    let growth = &config.growth;
    GrowthParams {
        axiom: growth.axiom.clone(),
        iterations: growth.iterations,
        branch_angle: growth.angle_degrees.to_radians(),
        leaf_density: growth.leaf_density,
        seed: growth.seed,
        depth_snapshot: if growth.propagate_depth {
            DepthSnapshot::PropagateLive
        } else {
            DepthSnapshot::ResetToZero
        },
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| Path::new(".").to_path_buf());
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    sylva_log::init_logging(Some(&config));

    let params = growth_params(&config);
    info!(
        axiom = %params.axiom,
        iterations = params.iterations,
        leaf_density = params.leaf_density,
        seed = params.seed,
        "growing tree"
    );

    let grammar = branching_tree();
    let templates = stock_templates();
    let mut tree: Vec<GeometryInstance> = Vec::new();
    let mut leaves: Vec<GeometryInstance> = Vec::new();
    let mut birds: Vec<GeometryInstance> = Vec::new();

    match grow(
        &params, &grammar, &templates, &mut tree, &mut leaves, &mut birds,
    ) {
        Ok(report) => {
            info!(
                expanded_symbols = report.expanded_symbols,
                tree_instances = report.tree_instances,
                leaf_instances = report.leaf_instances,
                bird_instances = report.bird_instances,
                "run complete"
            );
            if let Some(last) = tree.last() {
                info!(position = ?last.transform.translation, "last segment placed");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "generation run failed");
            ExitCode::FAILURE
        }
    }
}
