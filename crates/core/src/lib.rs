#![deny(unsafe_code)]
//! Rendering core for a host-embedded GLES surface.
//!
//! Compiles and links one solid-color shader program, uploads a
//! scale/aspect projection, and draws a fixed, ordered list of 2D shapes
//! (triangles and rectangles) every frame. The host owns the window and the
//! GL context; it calls [`RenderContext::init`] once the surface exists and
//! [`RenderContext::step`] every frame.

pub mod error;
pub mod projection;
pub mod render;
pub mod scene;
pub mod shape;

/// `log` target for every diagnostic the core emits.
pub const LOG_TARGET: &str = "gles_shapes";

pub use error::RenderError;
pub use projection::{projection_matrix, DEFAULT_SCALE};
pub use render::{GlBackend, RenderContext, ShaderError, ShaderStage};
pub use scene::{Scene, SceneConfig, ShapeConfig};
pub use shape::{Shape, ShapeKind};

#[cfg(feature = "render")]
pub use render::GpuContext;
