//! The turtle main loop: one forward pass over an expanded symbol string.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};
use sylva_random::RandomSource;
use tracing::debug;

use crate::config::{DepthSnapshot, TurtleConfig};
use crate::error::InterpretError;
use crate::instance::{
    GeometryInstance, GeometrySink, MeshTemplate, TemplateKind, TemplateSet, Transform,
};
use crate::pose::{Pose, PoseStack};

/// Instance counts for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpretReport {
    pub tree: usize,
    pub leaves: usize,
    pub birds: usize,
}

/// Walks a symbol string with one live [`Pose`] and one [`PoseStack`],
/// emitting placement commands to three external sinks.
///
/// Delivery is all-or-nothing: instances are buffered internally and
/// flushed only after the full pass succeeds, so a failed run leaves every
/// sink untouched. One interpreter serves exactly one run.
pub struct TurtleInterpreter<'a> {
    config: TurtleConfig,
    templates: &'a TemplateSet,
    pose: Pose,
    stack: PoseStack,
    tree: Vec<GeometryInstance>,
    leaves: Vec<GeometryInstance>,
    birds: Vec<GeometryInstance>,
}

impl<'a> TurtleInterpreter<'a> {
    pub fn new(config: TurtleConfig, templates: &'a TemplateSet) -> Self {
        Self {
            config,
            templates,
            pose: Pose::root(),
            stack: PoseStack::new(),
            tree: Vec::new(),
            leaves: Vec::new(),
            birds: Vec::new(),
        }
    }

    /// Interpret `symbols` and deliver the resulting placement commands.
    ///
    /// Symbols without an assigned meaning are consumed and ignored.
    pub fn run<S: RandomSource>(
        mut self,
        symbols: &str,
        rng: &mut S,
        tree_sink: &mut dyn GeometrySink,
        leaf_sink: &mut dyn GeometrySink,
        bird_sink: &mut dyn GeometrySink,
    ) -> Result<InterpretReport, InterpretError> {
        for (index, symbol) in symbols.chars().enumerate() {
            match symbol {
                'B' => self.grow_trunk(),
                'F' | 'A' => {
                    self.grow_branch(index);
                    if symbol == 'F' {
                        self.place_attachments(rng);
                    }
                }
                'X' => self.turn(Vec3::X, rng),
                'Y' => self.turn(Vec3::Y, rng),
                'Z' => self.turn(Vec3::Z, rng),
                '[' => self.push_pose(),
                ']' => self.pop_pose(index)?,
                _ => {}
            }
        }

        let report = InterpretReport {
            tree: self.tree.len(),
            leaves: self.leaves.len(),
            birds: self.birds.len(),
        };
        debug!(
            tree = report.tree,
            leaves = report.leaves,
            birds = report.birds,
            "interpretation complete"
        );
        for instance in self.tree.drain(..) {
            tree_sink.submit(instance);
        }
        for instance in self.leaves.drain(..) {
            leaf_sink.submit(instance);
        }
        for instance in self.birds.drain(..) {
            bird_sink.submit(instance);
        }
        Ok(report)
    }

    /// `B`: fixed-footprint trunk segment, then advance one segment height.
    fn grow_trunk(&mut self) {
        let scale = self.config.trunk_scale;
        let transform = self.segment_transform(scale, &self.templates.trunk);
        self.tree.push(GeometryInstance {
            kind: TemplateKind::Trunk,
            transform,
        });
        self.advance(self.templates.trunk.height * scale.y);
    }

    /// `F`/`A`: branch segment tapered by nesting depth, plus a base pad
    /// when the symbol sits within the opening window of the sequence.
    fn grow_branch(&mut self, index: usize) {
        let taper = 0.5_f32.powi(self.pose.depth as i32);
        let scale = Vec3::new(taper, taper * self.config.branch_length_factor, taper);
        let transform = self.segment_transform(scale, &self.templates.branch);
        self.tree.push(GeometryInstance {
            kind: TemplateKind::Branch,
            transform,
        });

        if index < self.config.base_window {
            let base_scale = self.config.base_scale;
            self.tree.push(GeometryInstance {
                kind: TemplateKind::Base,
                transform: Transform {
                    translation: base_scale * self.templates.base.center_offset,
                    rotation: Quat::IDENTITY,
                    scale: base_scale,
                },
            });
        }

        self.advance(self.templates.branch.height * scale.y);
    }

    /// Move the turtle along its heading by `distance`.
    fn advance(&mut self, distance: f32) {
        let step = self.pose.orientation * distance;
        self.pose.translate(step);
    }

    /// `X`/`Y`/`Z`: turn the heading by the configured magnitude about a
    /// principal axis, the sign drawn uniformly between plus and minus.
    fn turn<S: RandomSource>(&mut self, axis: Vec3, rng: &mut S) {
        let angle = if rng.next_unit() < 0.5 {
            -self.config.branch_angle
        } else {
            self.config.branch_angle
        };
        self.pose.rotate(axis, angle);
    }

    /// `[`: snapshot the pose, then deepen the live nesting level.
    fn push_pose(&mut self) {
        let depth = match self.config.depth_snapshot {
            DepthSnapshot::ResetToZero => 0,
            DepthSnapshot::PropagateLive => self.pose.depth,
        };
        self.stack.push(Pose { depth, ..self.pose });
        self.pose.depth += 1;
    }

    /// `]`: replace the live pose wholesale with the latest snapshot.
    fn pop_pose(&mut self, index: usize) -> Result<(), InterpretError> {
        self.pose = self
            .stack
            .pop()
            .ok_or(InterpretError::StackUnderflow { index })?;
        Ok(())
    }

    /// Foliage/fauna gates, evaluated independently per `F` after the
    /// segment has been placed and the turtle advanced.
    fn place_attachments<S: RandomSource>(&mut self, rng: &mut S) {
        let heading = self.pose.orientation.try_normalize().unwrap_or(Vec3::Y);
        let theta = heading.dot(Vec3::Y).clamp(-1.0, 1.0).acos();
        let off_horizontal = (theta - FRAC_PI_2).abs();
        let spawn_threshold = f64::from(1.0 - self.config.leaf_density);

        if off_horizontal < self.config.leaf_band() && rng.next_unit() > spawn_threshold {
            self.place_leaf(rng);
        }
        if off_horizontal < self.config.bird_band() && rng.next_unit() > spawn_threshold {
            self.place_bird(rng);
        }
    }

    fn place_leaf<S: RandomSource>(&mut self, rng: &mut S) {
        // One shared magnitude drives all three axis rotations.
        let magnitude = rng.next_unit() as f32 * TAU;
        let rotation = Quat::from_rotation_z(magnitude)
            * Quat::from_rotation_y(magnitude)
            * Quat::from_rotation_x(magnitude);
        let scale = Vec3::splat(self.config.leaf_scale);
        self.leaves.push(GeometryInstance {
            kind: TemplateKind::Leaf,
            transform: self.attachment_transform(rotation, scale, &self.templates.leaf),
        });
    }

    fn place_bird<S: RandomSource>(&mut self, rng: &mut S) {
        let yaw = rng.next_unit() as f32 * TAU;
        let rotation = Quat::from_rotation_y(yaw);
        let scale = Vec3::splat(self.config.bird_scale);
        self.birds.push(GeometryInstance {
            kind: TemplateKind::Bird,
            transform: self.attachment_transform(rotation, scale, &self.templates.bird),
        });
    }

    /// Segment transform at the current pose: recenter the template, scale,
    /// rotate model-up onto the heading, then place at the position.
    fn segment_transform(&self, scale: Vec3, template: &MeshTemplate) -> Transform {
        self.placed_transform(heading_rotation(self.pose.orientation), scale, template)
    }

    fn attachment_transform(
        &self,
        rotation: Quat,
        scale: Vec3,
        template: &MeshTemplate,
    ) -> Transform {
        self.placed_transform(rotation, scale, template)
    }

    fn placed_transform(&self, rotation: Quat, scale: Vec3, template: &MeshTemplate) -> Transform {
        Transform {
            translation: self.pose.position + rotation * (scale * template.center_offset),
            rotation,
            scale,
        }
    }
}

/// Shortest-arc rotation taking the template's primary axis (+Y) onto the
/// turtle's heading. Identity when already aligned.
fn heading_rotation(orientation: Vec3) -> Quat {
    let heading = orientation.try_normalize().unwrap_or(Vec3::Y);
    Quat::from_rotation_arc(Vec3::Y, heading)
}
