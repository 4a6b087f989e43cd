//! Error types for the rendering core.

use crate::render::shader::ShaderError;
use crate::shape::ShapeKind;
use thiserror::Error;

/// Errors produced while building a scene or setting up the GPU pipeline.
///
/// Every variant is terminal for the rendering session: there is no retry
/// and no fallback shader. A uniform missing from the linked program is
/// deliberately absent from this list.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Compiling or linking the fixed shader program failed.
    #[error("could not create program: {0}")]
    ProgramCreation(#[from] ShaderError),

    /// The linked program does not expose a required vertex attribute.
    #[error("attribute not found in program: {0}")]
    MissingAttribute(String),

    /// Width or height passed to setup was zero or negative.
    #[error("invalid viewport {width}x{height}: width and height must be positive")]
    InvalidViewport { width: i32, height: i32 },

    /// The projection scale constant was zero, negative or not finite.
    #[error("invalid projection scale: {0}")]
    InvalidScale(f32),

    /// A shape was given the wrong number of points for its kind.
    #[error("{kind} expects exactly {expected} points, got {got}")]
    PointCount {
        kind: ShapeKind,
        expected: usize,
        got: usize,
    },

    /// A scene configuration could not be parsed.
    #[error("invalid scene config: {0}")]
    Config(String),
}
