//! Expansion plus interpretation as one seeded, all-or-nothing run.

use sylva_grammar::{Grammar, GrammarEngine};
use sylva_random::run_rng;
use sylva_turtle::{GeometrySink, TemplateSet, TurtleConfig, TurtleInterpreter};
use tracing::{debug, warn};

use crate::params::{GrowthError, GrowthParams};

/// Summary of a completed generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// Symbol count of the fully expanded string.
    pub expanded_symbols: usize,
    /// Instances delivered to the trunk/branch sink.
    pub tree_instances: usize,
    /// Instances delivered to the leaf sink.
    pub leaf_instances: usize,
    /// Instances delivered to the bird sink.
    pub bird_instances: usize,
}

/// Run one full generation: validate, expand, interpret, deliver.
///
/// Grammar, pose, and stack state are fresh per call; the only state
/// carried in is the immutable `params` snapshot and the read-only grammar
/// and templates. On error nothing is delivered to the sinks.
pub fn grow(
    params: &GrowthParams,
    grammar: &Grammar,
    templates: &TemplateSet,
    tree_sink: &mut dyn GeometrySink,
    leaf_sink: &mut dyn GeometrySink,
    bird_sink: &mut dyn GeometrySink,
) -> Result<GrowthReport, GrowthError> {
    params.validate()?;
    for warning in grammar.validate() {
        warn!(%warning, "grammar validation");
    }

    let mut rng = run_rng(params.seed);

    let engine = GrammarEngine::new(grammar);
    let expanded = engine.expand_iterated(&params.axiom, params.iterations, &mut rng);
    let expanded_symbols = expanded.chars().count();
    debug!(expanded_symbols, "expansion complete");

    let config = TurtleConfig {
        branch_angle: params.branch_angle,
        leaf_density: params.leaf_density,
        depth_snapshot: params.depth_snapshot,
        ..TurtleConfig::default()
    };
    let report = TurtleInterpreter::new(config, templates).run(
        &expanded, &mut rng, tree_sink, leaf_sink, bird_sink,
    )?;

    Ok(GrowthReport {
        expanded_symbols,
        tree_instances: report.tree,
        leaf_instances: report.leaves,
        bird_instances: report.birds,
    })
}
