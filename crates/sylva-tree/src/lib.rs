//! One-shot tree generation pipeline.
//!
//! Wires the grammar engine to the turtle interpreter: an axiom is expanded
//! for a number of passes, then the expanded string is interpreted into
//! placement commands, all driven by a single seeded RNG. Each call to
//! [`grow`] is an independent run with fresh state.

mod params;
mod pipeline;
mod species;

pub use params::{GrowthError, GrowthParams};
pub use pipeline::{GrowthReport, grow};
pub use species::branching_tree;
