//! The driver seam between the rendering core and a GL implementation.
//!
//! `GlBackend` covers exactly the calls the core makes: shader and program
//! objects, attribute/uniform lookup, viewport, clear, vertex submission
//! and triangle-list draws. The production implementation is
//! `GpuContext` over `glow`; anything else that
//! speaks these calls (a recording backend in tests, for example) can drive
//! the same setup and frame code.
//!
//! Methods take `&self`: GL contexts are internally mutable and bound to
//! one thread, and the core never holds a backend across threads.

use super::shader::ShaderStage;
use glam::Vec2;

pub trait GlBackend {
    /// Handle to a compiled shader object.
    type Shader: Copy;
    /// Handle to a program object.
    type Program: Copy + PartialEq;
    /// Resolved uniform location.
    type UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    /// Location of a vertex attribute, or `None` if the program has no such input.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    /// Location of a uniform, or `None` if absent or optimized away by the driver.
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn uniform_matrix4(&self, location: &Self::UniformLocation, matrix: &[f32; 16]);
    fn uniform_vec3(&self, location: &Self::UniformLocation, value: [f32; 3]);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Clears color to `color` and clears depth.
    fn clear(&self, color: [f32; 4]);
    /// Uploads `vertices` as the 2-component float attribute at `index` and enables it.
    fn submit_vertices(&self, index: u32, vertices: &[Vec2]);
    /// Draws `count` vertices of the submitted stream as a triangle list.
    fn draw_triangles(&self, count: i32);
}
