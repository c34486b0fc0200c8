//! Stochastic string-rewriting grammar (L-system) engine.
//!
//! A [`Grammar`] maps symbols to weighted replacement rules; the
//! [`GrammarEngine`] rewrites a symbol string one pass at a time, drawing
//! one uniform value per registered symbol. Symbols with no registered
//! rules are terminals and copy through unchanged.

mod engine;
mod rules;

pub use engine::GrammarEngine;
pub use rules::{Grammar, GrammarWarning, Rule, RuleSet};
