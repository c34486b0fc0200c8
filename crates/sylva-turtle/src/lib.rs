//! Stack-based turtle interpretation of expanded L-system strings.
//!
//! The [`TurtleInterpreter`] walks a symbol string with one live [`Pose`]
//! and a [`PoseStack`], emitting oriented [`GeometryInstance`] placement
//! commands for trunk/branch segments, foliage, and fauna to external sinks.

mod config;
mod error;
mod instance;
mod interpreter;
mod pose;

pub use config::{DepthSnapshot, TurtleConfig};
pub use error::InterpretError;
pub use instance::{
    GeometryInstance, GeometrySink, MeshTemplate, TemplateKind, TemplateSet, Transform,
};
pub use interpreter::{InterpretReport, TurtleInterpreter};
pub use pose::{Pose, PoseStack};
