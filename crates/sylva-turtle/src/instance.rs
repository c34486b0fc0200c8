//! Geometry placement commands and the mesh-template contract.

use glam::{Mat4, Quat, Vec3};

/// Which mesh template an emitted instance refers to.
///
/// The core never touches vertex data; external collaborators resolve the
/// kind back to their loaded mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Trunk,
    Branch,
    Leaf,
    Bird,
    Base,
}

/// Translation / rotation / scale triple composed against a mesh template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A single placement command.
///
/// Produced by the interpreter and handed to a sink; the core never reads
/// it back.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryInstance {
    pub kind: TemplateKind,
    pub transform: Transform,
}

/// Read-only template metadata supplied by the external mesh loader.
///
/// The core reads only `height` (extent along the template's primary axis,
/// scaled to get the advance distance) and `center_offset` (template-local,
/// pre-scale translation that recenters the mesh on its local origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTemplate {
    pub height: f32,
    pub center_offset: Vec3,
}

impl MeshTemplate {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            center_offset: Vec3::ZERO,
        }
    }

    pub fn with_center_offset(height: f32, center_offset: Vec3) -> Self {
        Self {
            height,
            center_offset,
        }
    }
}

/// One template per [`TemplateKind`], fixed for the duration of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemplateSet {
    pub trunk: MeshTemplate,
    pub branch: MeshTemplate,
    pub leaf: MeshTemplate,
    pub bird: MeshTemplate,
    pub base: MeshTemplate,
}

/// Append-only receiver for placement commands.
///
/// Sinks are external; the core delivers instances in production order and
/// assumes nothing beyond sequential delivery within one run.
pub trait GeometrySink {
    fn submit(&mut self, instance: GeometryInstance);
}

impl GeometrySink for Vec<GeometryInstance> {
    fn submit(&mut self, instance: GeometryInstance) {
        self.push(instance);
    }
}
