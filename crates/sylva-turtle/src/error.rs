//! Interpreter error types.

/// Fatal failures while interpreting a symbol string.
///
/// A failed run delivers nothing to the sinks; previously committed
/// geometry owned by collaborators is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    /// A `]` with no matching `[` earlier in the sequence.
    #[error("']' at symbol {index} has no matching '['")]
    StackUnderflow { index: usize },
}
