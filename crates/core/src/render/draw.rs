//! Submitting a [`Shape`] to the GPU.

use super::backend::GlBackend;
use super::sources::COLOR_UNIFORM;
use super::uniform::set_color_uniform;
use crate::shape::Shape;

impl Shape {
    /// Draws the shape with `program`, which must already be active.
    ///
    /// Sets the fill color, submits the triangulated stream to the
    /// attribute at `position`, and issues one triangle-list draw over it.
    pub fn draw<G: GlBackend>(&self, gl: &G, program: G::Program, position: u32) {
        set_color_uniform(gl, program, COLOR_UNIFORM, self.color());

        let vertices = self.vertices();
        gl.submit_vertices(position, &vertices);
        gl.draw_triangles(vertices.len() as i32);
    }
}
