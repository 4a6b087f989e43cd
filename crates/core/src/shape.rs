//! Drawable shape data and triangulation.
//!
//! A [`Shape`] is a tagged polygon: a [`ShapeKind`] plus a fixed number of
//! local-space points and one solid RGB color. Triangulation is a pure
//! function from the point list to a triangle-list vertex stream, so the
//! emitted order can be checked without a GPU. Submission lives in
//! [`crate::render::draw`].

use crate::error::RenderError;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index expansion of a rectangle into two triangles sharing the p0-p2 diagonal.
pub const RECTANGLE_INDICES: [usize; 6] = [0, 1, 2, 2, 3, 0];

/// The polygon variants the core knows how to triangulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Rectangle,
}

impl ShapeKind {
    /// Number of input points this kind requires.
    pub fn point_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Rectangle => 4,
        }
    }

    /// Number of vertices emitted into the triangle list.
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Rectangle => RECTANGLE_INDICES.len(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Triangle => write!(f, "triangle"),
            ShapeKind::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// Expands `points` into the triangle-list stream for `kind`.
///
/// Callers must pass exactly `kind.point_count()` points; [`Shape`] enforces
/// this at construction.
pub fn triangulate(kind: ShapeKind, points: &[Vec2]) -> Vec<Vec2> {
    match kind {
        ShapeKind::Triangle => points.to_vec(),
        ShapeKind::Rectangle => RECTANGLE_INDICES.iter().map(|&i| points[i]).collect(),
    }
}

/// An immutable polygon with a solid fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Vec2>,
    color: Vec3,
}

impl Shape {
    /// Creates a shape, validating the point count against `kind`.
    ///
    /// Returns `RenderError::PointCount` if the count does not match.
    pub fn new(kind: ShapeKind, points: Vec<Vec2>, color: Vec3) -> Result<Self, RenderError> {
        let expected = kind.point_count();
        if points.len() != expected {
            return Err(RenderError::PointCount {
                kind,
                expected,
                got: points.len(),
            });
        }
        Ok(Self {
            kind,
            points,
            color,
        })
    }

    /// A triangle from three points.
    pub fn triangle(points: [Vec2; 3], color: Vec3) -> Self {
        Self {
            kind: ShapeKind::Triangle,
            points: points.to_vec(),
            color,
        }
    }

    /// A rectangle from four points given in perimeter order.
    pub fn rectangle(points: [Vec2; 4], color: Vec3) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            points: points.to_vec(),
            color,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// The triangle-list vertex stream this shape submits when drawn.
    pub fn vertices(&self) -> Vec<Vec2> {
        triangulate(self.kind, &self.points)
    }
}
