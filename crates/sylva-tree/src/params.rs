//! Run parameters and pipeline errors.

use std::f32::consts::FRAC_PI_4;

use sylva_turtle::{DepthSnapshot, InterpretError};

/// Immutable snapshot of one generation run's inputs.
///
/// Callers (GUI, CLI) copy their live controls into this struct before the
/// run starts; the pipeline never reads external state mid-run.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthParams {
    /// Starting symbol string. Unregistered symbols are terminals, not an
    /// error; brackets are only checked during interpretation.
    pub axiom: String,
    /// Number of rewrite passes. Zero interprets the axiom as-is.
    pub iterations: u32,
    /// Magnitude of `X`/`Y`/`Z` turns, radians.
    pub branch_angle: f32,
    /// Foliage/fauna spawn probability, in [0, 1].
    pub leaf_density: f32,
    /// Seed for the run's RNG; equal seeds reproduce the whole run.
    pub seed: u64,
    /// Depth bookkeeping mode for bracket snapshots.
    pub depth_snapshot: DepthSnapshot,
}

impl GrowthParams {
    pub fn validate(&self) -> Result<(), GrowthError> {
        if !(0.0..=1.0).contains(&self.leaf_density) {
            return Err(GrowthError::LeafDensityOutOfRange(self.leaf_density));
        }
        Ok(())
    }
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            axiom: "BF".to_string(),
            iterations: 3,
            branch_angle: FRAC_PI_4,
            leaf_density: 0.1,
            seed: 0,
            depth_snapshot: DepthSnapshot::default(),
        }
    }
}

/// Failures that abort a generation run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    #[error("leaf density {0} is outside [0, 1]")]
    LeafDensityOutOfRange(f32),

    #[error(transparent)]
    Interpret(#[from] InterpretError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(GrowthParams::default().validate().is_ok());
    }

    #[test]
    fn leaf_density_is_range_checked() {
        let mut params = GrowthParams::default();
        params.leaf_density = 1.5;
        assert_eq!(
            params.validate(),
            Err(GrowthError::LeafDensityOutOfRange(1.5))
        );
        params.leaf_density = -0.1;
        assert!(params.validate().is_err());
        params.leaf_density = 1.0;
        assert!(params.validate().is_ok());
    }
}
