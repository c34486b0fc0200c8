//! Turtle pose state and the bracket stack.

use glam::{Quat, Vec3};

/// Position, heading, and bracket-nesting depth of the turtle.
///
/// Plain value type: snapshots pushed onto a [`PoseStack`] are owned copies,
/// so a restored pose can never alias the live one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Heading direction. Rotations preserve its length; it is never
    /// renormalized.
    pub orientation: Vec3,
    pub depth: u32,
}

impl Pose {
    /// Starting pose: world origin, heading along world-up, depth 0.
    pub fn root() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Vec3::Y,
            depth: 0,
        }
    }

    /// Rotate the heading about `axis` by `radians` (axis-angle about the
    /// origin). Position is unaffected. `axis` must be non-zero.
    pub fn rotate(&mut self, axis: Vec3, radians: f32) {
        self.orientation = Quat::from_axis_angle(axis.normalize(), radians) * self.orientation;
    }

    /// Move the position by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::root()
    }
}

/// LIFO stack of pose snapshots backing `[` / `]` bracket handling.
///
/// Empty at the start of a run. Popping an empty stack is the caller's
/// structural error (unbalanced brackets) and surfaces as `None`.
#[derive(Debug, Default)]
pub struct PoseStack {
    stack: Vec<Pose>,
}

impl PoseStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an owned snapshot.
    pub fn push(&mut self, pose: Pose) {
        self.stack.push(pose);
    }

    /// Remove and return the most recently pushed snapshot.
    pub fn pop(&mut self) -> Option<Pose> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
