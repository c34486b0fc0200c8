//! Named interpreter constants.

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec3;

/// How `[` records the nesting depth in a pushed snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepthSnapshot {
    /// Snapshots always store depth 0, so `]` resets the live depth and
    /// taper restarts after every bracket. Matches the historical output.
    #[default]
    ResetToZero,
    /// Snapshots carry the live pose's depth, so `]` restores the depth
    /// that was current when the matching `[` was pushed.
    PropagateLive,
}

/// Tunable constants for the interpreter and the placement heuristic.
///
/// Every threshold that gates interpretation lives here so tests can pin
/// exact values without touching interpreter logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleConfig {
    /// Magnitude of `X`/`Y`/`Z` heading rotations, radians. The sign is
    /// drawn uniformly between plus and minus; the magnitude is fixed.
    pub branch_angle: f32,
    /// Probability that foliage/fauna attach at an eligible `F`, in [0, 1].
    /// Also scales both angular bands.
    pub leaf_density: f32,
    /// Depth bookkeeping mode for pushed snapshots.
    pub depth_snapshot: DepthSnapshot,
    /// Footprint scale applied to `B` trunk segments.
    pub trunk_scale: Vec3,
    /// Footprint scale of the base pad emitted near the origin.
    pub base_scale: Vec3,
    /// Uniform shrink factor for leaf instances.
    pub leaf_scale: f32,
    /// Uniform grow factor for bird instances.
    pub bird_scale: f32,
    /// Leaf gate angular band per unit of leaf density, radians.
    pub leaf_band_per_density: f32,
    /// Bird gate angular band per unit of leaf density, radians. Narrower
    /// than the leaf band.
    pub bird_band_per_density: f32,
    /// Growth-axis multiplier for tapered `F`/`A` segments.
    pub branch_length_factor: f32,
    /// Symbols within this many positions of the sequence start also emit
    /// a base pad when they draw a branch segment.
    pub base_window: usize,
}

impl TurtleConfig {
    /// Half-width of the leaf gate's band around horizontal, radians.
    pub fn leaf_band(&self) -> f32 {
        self.leaf_band_per_density * self.leaf_density
    }

    /// Half-width of the bird gate's band around horizontal, radians.
    pub fn bird_band(&self) -> f32 {
        self.bird_band_per_density * self.leaf_density
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            branch_angle: FRAC_PI_4,
            leaf_density: 0.1,
            depth_snapshot: DepthSnapshot::default(),
            trunk_scale: Vec3::new(2.0, 20.0, 2.0),
            base_scale: Vec3::new(5.0, 0.5, 5.0),
            leaf_scale: 0.015,
            bird_scale: 20.0,
            leaf_band_per_density: PI / 15.0,
            bird_band_per_density: PI / 40.0,
            branch_length_factor: 5.0,
            base_window: 5,
        }
    }
}
