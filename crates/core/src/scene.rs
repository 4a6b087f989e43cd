//! The fixed, ordered shape registry and its JSON configuration.
//!
//! A [`Scene`] is built once and handed to the render context; there is no
//! API to add or remove shapes afterwards. Draw order is registration order,
//! so later shapes composite on top of earlier ones.
//!
//! [`SceneConfig`] is the serializable form. Both keys are optional:
//!
//! ```json
//! {
//!   "scale": 150,
//!   "shapes": [
//!     { "kind": "triangle", "points": [[-20, -20], [0, 17.32], [20, -20]], "color": [0, 1, 0] }
//!   ]
//! }
//! ```

use crate::error::RenderError;
use crate::projection::{validate_scale, DEFAULT_SCALE};
use crate::shape::{Shape, ShapeKind};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// An ordered, immutable collection of shapes plus the projection scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    scale: f32,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates a scene, validating the scale.
    pub fn new(scale: f32, shapes: Vec<Shape>) -> Result<Self, RenderError> {
        validate_scale(scale)?;
        Ok(Self { scale, shapes })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for Scene {
    /// A green equilateral-ish triangle with a red rectangle drawn over its right half.
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            shapes: vec![default_triangle(), default_rectangle()],
        }
    }
}

fn default_triangle() -> Shape {
    Shape::triangle(
        [
            Vec2::new(-20.0, -20.0),
            Vec2::new(0.0, 17.32),
            Vec2::new(20.0, -20.0),
        ],
        Vec3::new(0.0, 1.0, 0.0),
    )
}

fn default_rectangle() -> Shape {
    Shape::rectangle(
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 30.0),
            Vec2::new(40.0, 30.0),
            Vec2::new(40.0, 0.0),
        ],
        Vec3::new(1.0, 0.0, 0.0),
    )
}

/// Serializable description of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    pub kind: ShapeKind,
    pub points: Vec<[f32; 2]>,
    pub color: [f32; 3],
}

impl From<&Shape> for ShapeConfig {
    fn from(shape: &Shape) -> Self {
        Self {
            kind: shape.kind(),
            points: shape.points().iter().map(|p| p.to_array()).collect(),
            color: shape.color().to_array(),
        }
    }
}

impl TryFrom<&ShapeConfig> for Shape {
    type Error = RenderError;

    fn try_from(config: &ShapeConfig) -> Result<Self, Self::Error> {
        let points = config.points.iter().copied().map(Vec2::from).collect();
        Shape::new(config.kind, points, Vec3::from(config.color))
    }
}

/// Serializable scene description. Missing keys fall back to [`Scene::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default = "default_shapes")]
    pub shapes: Vec<ShapeConfig>,
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

fn default_shapes() -> Vec<ShapeConfig> {
    Scene::default().shapes().iter().map(ShapeConfig::from).collect()
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            shapes: default_shapes(),
        }
    }
}

impl SceneConfig {
    /// Parses a scene config from JSON text.
    ///
    /// Returns `RenderError::Config` if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        serde_json::from_str(text).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Validates the config and builds the scene it describes.
    pub fn build(&self) -> Result<Scene, RenderError> {
        let shapes = self
            .shapes
            .iter()
            .map(Shape::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Scene::new(self.scale, shapes)
    }
}
