//! End-to-end generation runs: axiom in, placement commands out.

use glam::Vec3;
use sylva_grammar::{Grammar, Rule, RuleSet};
use sylva_tree::{GrowthError, GrowthParams, GrowthReport, branching_tree, grow};
use sylva_turtle::{GeometryInstance, InterpretError, MeshTemplate, TemplateSet};

fn templates() -> TemplateSet {
    let cylinder = MeshTemplate::new(1.0);
    TemplateSet {
        trunk: cylinder,
        branch: cylinder,
        leaf: MeshTemplate::with_center_offset(1.0, Vec3::new(0.0, -130.0, 0.0)),
        bird: MeshTemplate::new(1.0),
        base: cylinder,
    }
}

#[derive(Debug)]
struct Streams {
    tree: Vec<GeometryInstance>,
    leaves: Vec<GeometryInstance>,
    birds: Vec<GeometryInstance>,
}

fn run(params: &GrowthParams, grammar: &Grammar) -> Result<(GrowthReport, Streams), GrowthError> {
    let templates = templates();
    let mut streams = Streams {
        tree: Vec::new(),
        leaves: Vec::new(),
        birds: Vec::new(),
    };
    let report = grow(
        params,
        grammar,
        &templates,
        &mut streams.tree,
        &mut streams.leaves,
        &mut streams.birds,
    )?;
    Ok((report, streams))
}

#[test]
fn default_run_grows_a_tree() {
    let params = GrowthParams::default();
    let (report, streams) = run(&params, &branching_tree()).unwrap();

    // Three passes over "BF" grow well beyond the axiom.
    assert!(report.expanded_symbols > 2);
    assert!(report.tree_instances > 0);
    assert_eq!(report.tree_instances, streams.tree.len());
    assert_eq!(report.leaf_instances, streams.leaves.len());
    assert_eq!(report.bird_instances, streams.birds.len());
}

#[test]
fn equal_seeds_reproduce_every_stream() {
    let mut params = GrowthParams::default();
    params.iterations = 4;
    params.leaf_density = 0.8;
    params.seed = 1234;

    let grammar = branching_tree();
    let (report_a, streams_a) = run(&params, &grammar).unwrap();
    let (report_b, streams_b) = run(&params, &grammar).unwrap();

    assert_eq!(report_a, report_b);
    assert_eq!(streams_a.tree, streams_b.tree);
    assert_eq!(streams_a.leaves, streams_b.leaves);
    assert_eq!(streams_a.birds, streams_b.birds);
}

#[test]
fn different_seeds_diverge() {
    let mut params = GrowthParams::default();
    params.iterations = 4;
    params.seed = 1;
    let grammar = branching_tree();
    let (_, streams_a) = run(&params, &grammar).unwrap();

    params.seed = 2;
    let (_, streams_b) = run(&params, &grammar).unwrap();

    assert_ne!(streams_a.tree, streams_b.tree);
}

#[test]
fn zero_iterations_interpret_the_axiom_as_is() {
    let mut params = GrowthParams::default();
    params.axiom = "B".to_string();
    params.iterations = 0;
    let (report, streams) = run(&params, &branching_tree()).unwrap();
    assert_eq!(report.expanded_symbols, 1);
    assert_eq!(streams.tree.len(), 1);
}

#[test]
fn unbalanced_axiom_fails_without_delivering() {
    let mut params = GrowthParams::default();
    params.axiom = "B]".to_string();
    params.iterations = 0;

    let err = run(&params, &branching_tree()).unwrap_err();
    assert_eq!(
        err,
        GrowthError::Interpret(InterpretError::StackUnderflow { index: 1 })
    );
}

#[test]
fn out_of_range_leaf_density_is_rejected_up_front() {
    let mut params = GrowthParams::default();
    params.leaf_density = 2.0;
    let err = run(&params, &branching_tree()).unwrap_err();
    assert!(matches!(err, GrowthError::LeafDensityOutOfRange(_)));
}

#[test]
fn zero_density_never_spawns_attachments() {
    let mut params = GrowthParams::default();
    params.iterations = 4;
    params.leaf_density = 0.0;
    let (report, streams) = run(&params, &branching_tree()).unwrap();
    assert_eq!(report.leaf_instances, 0);
    assert!(streams.leaves.is_empty());
    assert!(streams.birds.is_empty());
}

#[test]
fn gappy_grammar_still_completes() {
    let mut grammar = Grammar::new();
    // Probabilities sum to 0.5: high draws delete the symbol.
    grammar.define('F', RuleSet::new(vec![Rule::new(0.5, "FF")]));
    assert_eq!(grammar.validate().len(), 1);

    let mut params = GrowthParams::default();
    params.axiom = "F".to_string();
    params.iterations = 3;
    let (report, _) = run(&params, &grammar).unwrap();
    // The run completes whether the lone symbol survived or not.
    assert!(report.expanded_symbols <= 8);
}
