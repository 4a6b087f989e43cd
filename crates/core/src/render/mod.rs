//! GPU pipeline: shader lifecycle, uniforms, shape submission and frames.
//!
//! Everything here drives the [`GlBackend`] trait, so setup and frame logic
//! run the same against a live context or a recording backend. The `glow`
//! implementation, `GpuContext`, needs the `render` feature.
//!
//! # Module overview
//!
//! - [`backend`] -- The driver seam.
//! - [`shader`] -- Shader compilation, linking, and error formatting.
//! - [`sources`] -- GLSL sources and input names.
//! - [`uniform`] -- Named uniform uploads.
//! - [`draw`] -- Shape submission.
//! - [`context`] -- Surface setup and the frame renderer.
//! - `gpu` -- `glow` backend (feature `render`).

pub mod backend;
pub mod context;
pub mod draw;
pub mod shader;
pub mod sources;
pub mod uniform;

#[cfg(feature = "render")]
pub mod gpu;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::GlBackend;
pub use context::{Pipeline, RenderContext, CLEAR_COLOR};
pub use shader::{
    compile_shader, create_program, format_shader_error, link_program, ShaderError, ShaderStage,
};
pub use uniform::{set_color_uniform, set_matrix_uniform};

#[cfg(feature = "render")]
pub use gpu::GpuContext;
