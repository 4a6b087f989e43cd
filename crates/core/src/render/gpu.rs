//! `glow`-backed GPU context.
//!
//! `GpuContext` wraps a `glow::Context` together with the one vertex array
//! and streaming vertex buffer the core draws through. Shapes are tiny and
//! re-uploaded every draw, so a single `STREAM_DRAW` buffer replaces the
//! client-side arrays GLES2 would allow but WebGL and core profiles do not.

use super::backend::GlBackend;
use super::shader::ShaderStage;
use glam::Vec2;
use glow::HasContext;

/// Wraps a `glow::Context` with the buffers used for vertex submission.
///
/// Created once by the host after the GL context is current.
pub struct GpuContext {
    gl: glow::Context,
    vertex_array: glow::VertexArray,
    vertex_buffer: glow::Buffer,
}

impl GpuContext {
    /// Creates the vertex array and streaming buffer and leaves both bound.
    ///
    /// # Errors
    ///
    /// Returns the driver's message if either object cannot be created.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context) -> Result<Self, String> {
        // SAFETY: glow wraps raw GL calls as unsafe. The objects are created
        // on the current context and bound before any draw uses them.
        let (vertex_array, vertex_buffer) = unsafe {
            let vertex_array = gl.create_vertex_array()?;
            let vertex_buffer = match gl.create_buffer() {
                Ok(b) => b,
                Err(e) => {
                    gl.delete_vertex_array(vertex_array);
                    return Err(e);
                }
            };
            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            (vertex_array, vertex_buffer)
        };

        Ok(Self {
            gl,
            vertex_array,
            vertex_buffer,
        })
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

fn shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// SAFETY (all methods): glow marks every GL entry point unsafe. Handles
// passed in were produced by this same context, and the core only calls in
// from the thread that owns it.
#[allow(unsafe_code)]
impl GlBackend for GpuContext {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { self.gl.create_shader(shader_type(stage)) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn attrib_location(&self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn uniform_matrix4(&self, location: &glow::UniformLocation, matrix: &[f32; 16]) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(location), false, matrix)
        }
    }

    fn uniform_vec3(&self, location: &glow::UniformLocation, value: [f32; 3]) {
        unsafe {
            self.gl
                .uniform_3_f32(Some(location), value[0], value[1], value[2])
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn submit_vertices(&self, index: u32, vertices: &[Vec2]) {
        let flat: Vec<f32> = vertices.iter().flat_map(|v| v.to_array()).collect();
        unsafe {
            self.gl.bind_vertex_array(Some(self.vertex_array));
            self.gl
                .bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(flat.as_slice()),
                glow::STREAM_DRAW,
            );
            self.gl
                .vertex_attrib_pointer_f32(index, 2, glow::FLOAT, false, 0, 0);
            self.gl.enable_vertex_attrib_array(index);
        }
    }

    fn draw_triangles(&self, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, count) }
    }
}
