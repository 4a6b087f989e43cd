//! A recording `GlBackend` for tests.
//!
//! Hands out integer handles, tracks which shader and program objects are
//! alive, and records every state-changing call in order so tests can
//! assert on exact driver sequences.

use super::backend::GlBackend;
use super::shader::ShaderStage;
use super::sources::{COLOR_UNIFORM, POSITION_ATTRIBUTE, PROJECTION_UNIFORM};
use glam::Vec2;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    UniformMatrix4 { program: u32, name: String, matrix: [f32; 16] },
    UniformVec3 { program: u32, name: String, value: [f32; 3] },
    SubmitVertices { index: u32, vertices: Vec<Vec2> },
    DrawTriangles(i32),
}

struct ShaderObject {
    source: String,
    compiled: bool,
}

struct State {
    next_handle: u32,
    calls: Vec<Call>,
    shaders: HashMap<u32, ShaderObject>,
    programs: HashSet<u32>,
    reject_marker: Option<String>,
    link_failure: Option<String>,
    uniforms: Vec<String>,
    attributes: Vec<String>,
}

pub struct RecordingBackend {
    state: RefCell<State>,
}

impl RecordingBackend {
    /// A backend whose programs expose the standard uniforms and position attribute.
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State {
                next_handle: 1,
                calls: Vec::new(),
                shaders: HashMap::new(),
                programs: HashSet::new(),
                reject_marker: None,
                link_failure: None,
                uniforms: vec![PROJECTION_UNIFORM.into(), COLOR_UNIFORM.into()],
                attributes: vec![POSITION_ATTRIBUTE.into()],
            }),
        }
    }

    /// Fails compilation of any source containing `marker`.
    pub fn reject_source_containing(self, marker: &str) -> Self {
        self.state.borrow_mut().reject_marker = Some(marker.into());
        self
    }

    /// Fails every link with `log`.
    pub fn fail_link(self, log: &str) -> Self {
        self.state.borrow_mut().link_failure = Some(log.into());
        self
    }

    /// Behaves as if the driver optimized `name` out of linked programs.
    pub fn without_uniform(self, name: &str) -> Self {
        self.state.borrow_mut().uniforms.retain(|u| u != name);
        self
    }

    pub fn without_attribute(self, name: &str) -> Self {
        self.state.borrow_mut().attributes.retain(|a| a != name);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn is_live_program(&self, program: u32) -> bool {
        self.state.borrow().programs.contains(&program)
    }

    pub fn live_program_count(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn live_shader_count(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_handle(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle;
        state.next_handle += 1;
        handle
    }
}

impl GlBackend for RecordingBackend {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = (u32, String);

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        let handle = self.next_handle();
        self.state.borrow_mut().shaders.insert(
            handle,
            ShaderObject {
                source: String::new(),
                compiled: false,
            },
        );
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(obj) = self.state.borrow_mut().shaders.get_mut(&shader) {
            obj.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
        let mut state = self.state.borrow_mut();
        let marker = state.reject_marker.clone();
        if let Some(obj) = state.shaders.get_mut(&shader) {
            obj.compiled = marker.map_or(true, |m| !obj.source.contains(&m));
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .is_some_and(|obj| obj.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "ERROR: 0:1: syntax error".into()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        let handle = self.next_handle();
        self.state.borrow_mut().programs.insert(handle);
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.state.borrow().link_failure.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.state.borrow().link_failure.clone().unwrap_or_default()
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
        self.state.borrow_mut().programs.remove(&program);
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        if !state.programs.contains(&program) {
            return None;
        }
        state
            .attributes
            .iter()
            .position(|a| a == name)
            .map(|i| i as u32)
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<(u32, String)> {
        let state = self.state.borrow();
        (state.programs.contains(&program) && state.uniforms.iter().any(|u| u == name))
            .then(|| (program, name.to_string()))
    }

    fn uniform_matrix4(&self, location: &(u32, String), matrix: &[f32; 16]) {
        self.record(Call::UniformMatrix4 {
            program: location.0,
            name: location.1.clone(),
            matrix: *matrix,
        });
    }

    fn uniform_vec3(&self, location: &(u32, String), value: [f32; 3]) {
        self.record(Call::UniformVec3 {
            program: location.0,
            name: location.1.clone(),
            value,
        });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(Call::Clear(color));
    }

    fn submit_vertices(&self, index: u32, vertices: &[Vec2]) {
        self.record(Call::SubmitVertices {
            index,
            vertices: vertices.to_vec(),
        });
    }

    fn draw_triangles(&self, count: i32) {
        self.record(Call::DrawTriangles(count));
    }
}
