//! Named uniform uploads into a linked program.
//!
//! Locations are resolved by name on every call. A name the driver does not
//! report (never declared, or optimized out because the stage never reads
//! it) is skipped silently; that is not an error condition.

use super::backend::GlBackend;
use glam::{Mat4, Vec3};

/// Uploads `matrix` to the `mat4` uniform `name`.
///
/// Returns `false` without touching the GPU state if the uniform is absent.
pub fn set_matrix_uniform<G: GlBackend>(
    gl: &G,
    program: G::Program,
    name: &str,
    matrix: &Mat4,
) -> bool {
    match gl.uniform_location(program, name) {
        Some(location) => {
            gl.uniform_matrix4(&location, &matrix.to_cols_array());
            true
        }
        None => false,
    }
}

/// Uploads `color` to the `vec3` uniform `name`.
///
/// Returns `false` without touching the GPU state if the uniform is absent.
pub fn set_color_uniform<G: GlBackend>(gl: &G, program: G::Program, name: &str, color: Vec3) -> bool {
    match gl.uniform_location(program, name) {
        Some(location) => {
            gl.uniform_vec3(&location, color.to_array());
            true
        }
        None => false,
    }
}
