//! Iterative stochastic expansion of a symbol string.

use sylva_random::RandomSource;
use tracing::debug;

use crate::rules::Grammar;

/// Applies a [`Grammar`] to symbol strings, one rewrite pass at a time.
///
/// One uniform draw is consumed per registered symbol per pass; terminals
/// consume nothing. Output length is unbounded and can grow geometrically
/// with the iteration count.
pub struct GrammarEngine<'a> {
    grammar: &'a Grammar,
}

impl<'a> GrammarEngine<'a> {
    pub fn new(grammar: &'a Grammar) -> Self {
        Self { grammar }
    }

    /// Single rewrite pass over `input`.
    ///
    /// Per symbol, in order: terminals copy through unchanged; registered
    /// symbols draw once and append the selected rule's replacement. A draw
    /// above the rule set's total probability deletes the symbol.
    pub fn expand<S: RandomSource>(&self, input: &str, rng: &mut S) -> String {
        let mut output = String::with_capacity(input.len());
        for symbol in input.chars() {
            match self.grammar.rule_set(symbol) {
                None => output.push(symbol),
                Some(rules) => {
                    if let Some(replacement) = rules.select(rng.next_unit()) {
                        output.push_str(replacement);
                    }
                }
            }
        }
        output
    }

    /// Apply [`expand`](Self::expand) `iterations` times, each pass feeding
    /// on the previous pass's full output. Zero iterations returns the axiom
    /// unchanged.
    pub fn expand_iterated<S: RandomSource>(
        &self,
        axiom: &str,
        iterations: u32,
        rng: &mut S,
    ) -> String {
        let mut expanded = axiom.to_string();
        for pass in 0..iterations {
            expanded = self.expand(&expanded, rng);
            debug!(pass, symbols = expanded.chars().count(), "rewrite pass");
        }
        expanded
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use sylva_random::ScriptedSource;

    use super::*;
    use crate::rules::{Rule, RuleSet};

    fn tree_grammar() -> Grammar {
        let mut grammar = Grammar::new();
        grammar.define('B', RuleSet::new(vec![Rule::new(1.0, "B")]));
        grammar.define(
            'F',
            RuleSet::new(vec![
                Rule::new(0.7, "FF[YFXFXF][ZFYFYF][XFZFZF]"),
                Rule::new(0.3, "FF[YFXFXF][XFZFZF][ZFYFYF]"),
            ]),
        );
        grammar
    }

    #[test]
    fn terminals_expand_to_themselves() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ScriptedSource::new([]);
        assert_eq!(engine.expand("[]QZ", &mut rng), "[]QZ");
    }

    #[test]
    fn zero_iterations_is_identity() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ScriptedSource::new([]);
        assert_eq!(engine.expand_iterated("BF[X]F", 0, &mut rng), "BF[X]F");
    }

    #[test]
    fn unit_probability_rule_is_stable() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ScriptedSource::new([0.999, 0.0, 0.5]);
        assert_eq!(engine.expand_iterated("B", 3, &mut rng), "B");
    }

    #[test]
    fn draw_of_half_selects_first_weighted_rule() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        // Cumulative probability of the first rule is 0.7 >= 0.5.
        let mut rng = ScriptedSource::new([0.5]);
        assert_eq!(engine.expand("F", &mut rng), "FF[YFXFXF][ZFYFYF][XFZFZF]");
        assert!(rng.exhausted());
    }

    #[test]
    fn high_draw_selects_second_weighted_rule() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ScriptedSource::new([0.85]);
        assert_eq!(engine.expand("F", &mut rng), "FF[YFXFXF][XFZFZF][ZFYFYF]");
    }

    #[test]
    fn complete_rule_sets_never_shrink_the_string() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut expanded = "BF".to_string();
        for _ in 0..4 {
            let next = engine.expand(&expanded, &mut rng);
            assert!(next.chars().count() >= expanded.chars().count());
            expanded = next;
        }
    }

    #[test]
    fn probability_gap_deletes_the_symbol() {
        let mut grammar = Grammar::new();
        grammar.define('F', RuleSet::new(vec![Rule::new(0.4, "FF")]));
        let engine = GrammarEngine::new(&grammar);
        let mut rng = ScriptedSource::new([0.9, 0.1]);
        // First F draws 0.9 (above the 0.4 total, deleted); second draws 0.1.
        assert_eq!(engine.expand("FF", &mut rng), "FF");
    }

    #[test]
    fn seeded_expansion_is_reproducible() {
        let grammar = tree_grammar();
        let engine = GrammarEngine::new(&grammar);

        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let first = engine.expand_iterated("BF", 4, &mut a);
        let second = engine.expand_iterated("BF", 4, &mut b);
        assert_eq!(first, second);
    }
}
