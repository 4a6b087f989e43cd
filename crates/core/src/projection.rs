//! Scale/aspect projection for the 2D scene.
//!
//! Shapes are authored in local units, not normalized device coordinates.
//! The projection divides both axes by a fixed scale constant and corrects
//! the x axis for the viewport aspect ratio, so a unit is the same number
//! of pixels horizontally and vertically.

use crate::error::RenderError;
use glam::{Mat4, Vec4};

/// Default number of local units from the center to the top edge of the viewport.
pub const DEFAULT_SCALE: f32 = 100.0;

/// Computes `diag((height / width) / scale, 1 / scale, 1, 1)`.
///
/// The matrix is diagonal, so its row-major and column-major layouts are
/// identical and it can be uploaded without transposition.
///
/// # Errors
///
/// Returns `RenderError::InvalidViewport` for non-positive dimensions and
/// `RenderError::InvalidScale` for a zero, negative or non-finite scale.
pub fn projection_matrix(width: i32, height: i32, scale: f32) -> Result<Mat4, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidViewport { width, height });
    }
    validate_scale(scale)?;

    let ratio = height as f32 / width as f32;
    Ok(Mat4::from_diagonal(Vec4::new(
        ratio / scale,
        1.0 / scale,
        1.0,
        1.0,
    )))
}

/// Checks that `scale` is usable as a projection divisor.
pub fn validate_scale(scale: f32) -> Result<(), RenderError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidScale(scale))
    }
}
