//! Stock production sets.

use sylva_grammar::{Grammar, Rule, RuleSet};

/// The default branching-tree grammar.
///
/// `B` is a stable trunk segment; `F` splits into a doubled segment with
/// three bracketed side shoots, with two weighted orderings of the shoot
/// rotations. `A` segments and the rotation/bracket symbols are terminals.
pub fn branching_tree() -> Grammar {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_grammar_has_no_probability_gaps() {
        assert!(branching_tree().validate().is_empty());
    }

    #[test]
    fn rotation_and_bracket_symbols_are_terminals() {
        let grammar = branching_tree();
        for symbol in ['A', 'X', 'Y', 'Z', '[', ']'] {
            assert!(grammar.is_terminal(symbol), "'{symbol}' should be terminal");
        }
        assert!(!grammar.is_terminal('F'));
    }
}
