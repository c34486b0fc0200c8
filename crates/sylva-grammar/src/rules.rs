//! Weighted production rules and the symbol-to-rules mapping.

use std::collections::HashMap;

/// Slack tolerated before a rule set is reported as leaving a probability gap.
const PROBABILITY_EPSILON: f64 = 1e-9;

/// A single weighted production: a replacement string and its selection
/// probability in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub probability: f64,
    pub replacement: String,
}

impl Rule {
    pub fn new(probability: f64, replacement: impl Into<String>) -> Self {
        Self {
            probability,
            replacement: replacement.into(),
        }
    }
}

/// Ordered list of productions for one symbol.
///
/// Selection is cumulative-distribution sampling: rules are scanned in
/// definition order accumulating probability, and the first rule whose
/// running sum reaches the draw wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Sum of all rule probabilities. Not required to be exactly 1.
    pub fn total_probability(&self) -> f64 {
        self.rules.iter().map(|rule| rule.probability).sum()
    }

    /// Select the replacement for a uniform draw `r` in `[0, 1)`.
    ///
    /// Returns `None` when `r` exceeds the total probability (a probability
    /// gap): the symbol produces an empty replacement and is deleted.
    pub fn select(&self, r: f64) -> Option<&str> {
        let mut sum = 0.0;
        for rule in &self.rules {
            sum += rule.probability;
            if sum >= r {
                return Some(&rule.replacement);
            }
        }
        None
    }
}

/// Non-fatal issues detected when validating a [`Grammar`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GrammarWarning {
    /// Rule probabilities for a symbol sum to less than 1, so a draw above
    /// the total silently deletes the symbol during expansion.
    #[error("rules for '{symbol}' sum to {total}; draws above that delete the symbol")]
    ProbabilityGap { symbol: char, total: f64 },
}

/// Mapping from symbol to its production rules.
///
/// Symbols with no entry are terminals and expand to themselves. The map is
/// an explicit `HashMap` keyed by `char`; nothing relies on contiguous
/// character codes.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    productions: HashMap<char, RuleSet>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the rule set for `symbol`.
    pub fn define(&mut self, symbol: char, rules: RuleSet) {
        self.productions.insert(symbol, rules);
    }

    pub fn rule_set(&self, symbol: char) -> Option<&RuleSet> {
        self.productions.get(&symbol)
    }

    /// True when `symbol` has no registered rules and copies through
    /// expansion unchanged.
    pub fn is_terminal(&self, symbol: char) -> bool {
        !self.productions.contains_key(&symbol)
    }

    /// Check every rule set for probability gaps.
    ///
    /// Gaps are legal at expansion time; callers decide whether to log the
    /// warnings or reject the grammar outright.
    pub fn validate(&self) -> Vec<GrammarWarning> {
        let mut warnings: Vec<GrammarWarning> = self
            .productions
            .iter()
            .filter_map(|(&symbol, rules)| {
                let total = rules.total_probability();
                (total < 1.0 - PROBABILITY_EPSILON)
                    .then_some(GrammarWarning::ProbabilityGap { symbol, total })
            })
            .collect();
        warnings.sort_by_key(|warning| match warning {
            GrammarWarning::ProbabilityGap { symbol, .. } => *symbol,
        });
        warnings
    }
}
