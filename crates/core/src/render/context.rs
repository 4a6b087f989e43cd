//! The render context: surface setup and per-frame drawing.
//!
//! `RenderContext` owns the backend, the scene and every piece of state the
//! pipeline needs between calls (linked program, position attribute
//! location, projection). It is created by the host, mutated only by
//! [`RenderContext::setup_graphics`], and read by
//! [`RenderContext::render_frame`]. All calls must come from the thread that
//! owns the GL context.

use super::backend::GlBackend;
use super::shader::create_program;
use super::sources::{FRAGMENT_SHADER, POSITION_ATTRIBUTE, PROJECTION_UNIFORM, VERTEX_SHADER};
use super::uniform::set_matrix_uniform;
use crate::error::RenderError;
use crate::projection::projection_matrix;
use crate::scene::Scene;
use crate::LOG_TARGET;
use glam::Mat4;

/// Opaque black.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A linked program together with its resolved position input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline<P> {
    pub program: P,
    pub position: u32,
}

pub struct RenderContext<G: GlBackend> {
    gl: G,
    scene: Scene,
    pipeline: Option<Pipeline<G::Program>>,
    projection: Mat4,
}

impl<G: GlBackend> RenderContext<G> {
    /// Wraps a backend and a scene. No GPU work happens until setup.
    pub fn new(gl: G, scene: Scene) -> Self {
        Self {
            gl,
            scene,
            pipeline: None,
            projection: Mat4::IDENTITY,
        }
    }

    pub fn backend(&self) -> &G {
        &self.gl
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The active pipeline, or `None` before a successful setup.
    pub fn pipeline(&self) -> Option<Pipeline<G::Program>> {
        self.pipeline
    }

    /// The projection uploaded by the last successful setup.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn is_ready(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Builds the program and uploads the projection for a `width` x `height` surface.
    ///
    /// Any program from a previous setup is deleted first, so calling this
    /// again on resize never leaves a stale handle in use.
    ///
    /// # Errors
    ///
    /// - `RenderError::InvalidViewport` for non-positive dimensions (no GPU calls made).
    /// - `RenderError::ProgramCreation` if a stage fails to compile or the program fails to link.
    /// - `RenderError::MissingAttribute` if the program has no position input.
    pub fn setup_graphics(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        log::info!(target: LOG_TARGET, "setup_graphics({width}, {height})");

        let projection = projection_matrix(width, height, self.scene.scale())?;

        if let Some(previous) = self.pipeline.take() {
            self.gl.delete_program(previous.program);
        }

        let program = create_program(&self.gl, VERTEX_SHADER, FRAGMENT_SHADER).map_err(|e| {
            log::error!(target: LOG_TARGET, "could not create program");
            RenderError::from(e)
        })?;

        let Some(position) = self.gl.attrib_location(program, POSITION_ATTRIBUTE) else {
            log::error!(target: LOG_TARGET, "attribute {POSITION_ATTRIBUTE} not found");
            self.gl.delete_program(program);
            return Err(RenderError::MissingAttribute(POSITION_ATTRIBUTE.to_string()));
        };
        log::info!(target: LOG_TARGET, "attrib location {POSITION_ATTRIBUTE} = {position}");

        self.gl.viewport(0, 0, width, height);
        self.gl.use_program(Some(program));
        set_matrix_uniform(&self.gl, program, PROJECTION_UNIFORM, &projection);

        self.projection = projection;
        self.pipeline = Some(Pipeline { program, position });
        Ok(())
    }

    /// Host-boundary form of [`setup_graphics`](Self::setup_graphics).
    ///
    /// Returns `false` when setup fails; the surface cannot render this session.
    pub fn init(&mut self, width: i32, height: i32) -> bool {
        match self.setup_graphics(width, height) {
            Ok(()) => true,
            Err(e) => {
                log::error!(target: LOG_TARGET, "{e}");
                false
            }
        }
    }

    /// Clears the frame and draws every shape in registration order.
    ///
    /// Before a successful setup the frame is cleared and nothing is drawn.
    pub fn render_frame(&self) {
        self.gl.clear(CLEAR_COLOR);

        let Some(pipeline) = self.pipeline else {
            return;
        };

        self.gl.use_program(Some(pipeline.program));
        for shape in self.scene.shapes() {
            shape.draw(&self.gl, pipeline.program, pipeline.position);
        }
    }

    /// Alias for [`render_frame`](Self::render_frame), matching the host's per-frame entry point.
    pub fn step(&self) {
        self.render_frame();
    }
}
