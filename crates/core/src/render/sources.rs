//! GLSL sources for the single solid-color program, and the names the host
//! side uses to address its inputs.
//!
//! Both stages target GLSL ES 1.00 so the program runs unchanged on GLES2,
//! GLES3 and WebGL.

/// Uniform holding the scale/aspect projection matrix.
pub const PROJECTION_UNIFORM: &str = "projMatrix";
/// Uniform holding the solid fill color.
pub const COLOR_UNIFORM: &str = "mColor";
/// Per-vertex position input.
pub const POSITION_ATTRIBUTE: &str = "vPosition";

/// Vertex stage: projects local-space positions.
pub const VERTEX_SHADER: &str = "uniform mat4 projMatrix;
attribute vec4 vPosition;
void main() {
  gl_Position = projMatrix * vPosition;
}
";

/// Fragment stage: fills with one opaque color.
pub const FRAGMENT_SHADER: &str = "precision mediump float;
uniform vec3 mColor;
void main() {
  gl_FragColor = vec4(mColor, 1.0);
}
";
