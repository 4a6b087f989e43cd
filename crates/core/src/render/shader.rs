//! Shader compilation and linking.
//!
//! Provides error types, source formatting for debugging, and functions
//! to compile individual shader stages and link them into programs.
//! The compile/link functions drive any [`GlBackend`]; the formatting
//! utility is pure string processing.

use super::backend::GlBackend;
use crate::LOG_TARGET;
use std::fmt;
use thiserror::Error;

/// Pipeline stage a shader source targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    CompileError {
        /// The stage that failed.
        stage: ShaderStage,
        /// The driver's info log, prefixed with the numbered source.
        log: String,
    },
    /// A program failed to link.
    #[error("shader link error:\n{0}")]
    LinkError(String),
}

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`, so line references in the log can be
/// matched against the GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let source_lines: Vec<&str> = source.lines().collect();
    let width = source_lines.len().max(1).to_string().len();

    let numbered: String = source_lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage.
///
/// On failure the shader object is deleted before returning and the driver
/// log is reported at ERROR level.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` if the shader object cannot be
/// created or the GLSL source fails to compile.
pub fn compile_shader<G: GlBackend>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|log| ShaderError::CompileError { stage, log })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        return Ok(shader);
    }

    let info_log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    log::error!(target: LOG_TARGET, "could not compile {stage} shader:\n{info_log}");
    Err(ShaderError::CompileError {
        stage,
        log: format_shader_error(source, &info_log),
    })
}

/// Links a vertex and fragment shader into a program.
///
/// Attaches both shaders, links, and detaches them afterward. On failure
/// the program is deleted and the driver log is reported at ERROR level.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` if the program cannot be created or
/// linking fails.
pub fn link_program<G: GlBackend>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().map_err(ShaderError::LinkError)?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);

    if gl.program_link_status(program) {
        return Ok(program);
    }

    let info_log = gl.program_info_log(program);
    gl.delete_program(program);
    log::error!(target: LOG_TARGET, "could not link program:\n{info_log}");
    Err(ShaderError::LinkError(info_log))
}

/// Compiles vertex and fragment sources and links them into a program.
///
/// If either stage fails to compile, linking is skipped entirely. Shader
/// objects are deleted once they are no longer needed, whatever the outcome.
///
/// # Errors
///
/// Returns the first `ShaderError` encountered.
pub fn create_program<G: GlBackend>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<G::Program, ShaderError> {
    let vert = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let frag = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(f) => f,
        Err(e) => {
            gl.delete_shader(vert);
            return Err(e);
        }
    };

    let result = link_program(gl, vert, frag);

    gl.delete_shader(vert);
    gl.delete_shader(frag);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::mock::{Call, RecordingBackend};
    use crate::render::sources::{FRAGMENT_SHADER, VERTEX_SHADER};

    // --- format_shader_error ---

    #[test]
    fn format_shader_error_prepends_line_numbers() {
        let formatted = format_shader_error("uniform mat4 m;\nvoid main() {\n}\n", "ERROR: 0:2");
        assert!(formatted.contains("1: uniform mat4 m;"), "got:\n{formatted}");
        assert!(formatted.contains("2: void main() {"), "got:\n{formatted}");
        assert!(formatted.contains("3: }"), "got:\n{formatted}");
        assert!(formatted.ends_with("ERROR: 0:2"), "got:\n{formatted}");
    }

    #[test]
    fn format_shader_error_handles_empty_inputs() {
        assert_eq!(format_shader_error("", "some error"), "some error");
        assert_eq!(format_shader_error("void main() {}", ""), "1: void main() {}");
        assert!(format_shader_error("", "").is_empty());
    }

    #[test]
    fn format_shader_error_right_aligns_line_numbers() {
        let source = (1..=12)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let formatted = format_shader_error(&source, "err");
        let lines: Vec<&str> = formatted.lines().collect();
        assert!(lines[0].starts_with(" 1: "), "got: '{}'", lines[0]);
        assert!(lines[9].starts_with("10: "), "got: '{}'", lines[9]);
    }

    // --- ShaderError Display ---

    #[test]
    fn compile_error_display_includes_stage_and_log() {
        let err = ShaderError::CompileError {
            stage: ShaderStage::Vertex,
            log: "undeclared identifier".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("vertex"), "missing stage in: {msg}");
        assert!(msg.contains("undeclared identifier"), "missing log in: {msg}");
    }

    #[test]
    fn link_error_display_includes_log() {
        let err = ShaderError::LinkError("varying mismatch".into());
        assert!(format!("{err}").contains("varying mismatch"));
    }

    // --- compile / link against the recording backend ---

    #[test]
    fn valid_sources_link_into_program() {
        let gl = RecordingBackend::new();
        let program = create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::LinkProgram(p) if *p == program)), 1);
        assert!(gl.is_live_program(program));
    }

    #[test]
    fn program_attaches_both_shaders_before_linking() {
        let gl = RecordingBackend::new();
        create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap();
        let calls = gl.calls();
        let link_at = calls
            .iter()
            .position(|c| matches!(c, Call::LinkProgram(_)))
            .unwrap();
        let attaches = calls[..link_at]
            .iter()
            .filter(|c| matches!(c, Call::AttachShader { .. }))
            .count();
        assert_eq!(attaches, 2);
    }

    #[test]
    fn shaders_are_released_after_successful_link() {
        let gl = RecordingBackend::new();
        create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap();
        assert_eq!(gl.live_shader_count(), 0);
    }

    #[test]
    fn vertex_syntax_error_skips_fragment_and_link() {
        let gl = RecordingBackend::new().reject_source_containing("gl_Position");
        let err = create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::CompileError {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
        assert_eq!(gl.count(|c| matches!(c, Call::CreateShader(_))), 1);
        assert_eq!(gl.count(|c| matches!(c, Call::CreateProgram)), 0);
        assert_eq!(gl.count(|c| matches!(c, Call::LinkProgram(_))), 0);
        assert_eq!(gl.live_shader_count(), 0);
    }

    #[test]
    fn fragment_syntax_error_releases_vertex_shader_and_skips_link() {
        let gl = RecordingBackend::new().reject_source_containing("gl_FragColor");
        let err = create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap_err();
        match err {
            ShaderError::CompileError { stage, log } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(log.contains("1: precision mediump float;"), "got:\n{log}");
                assert!(log.contains("syntax error"), "got:\n{log}");
            }
            other => panic!("expected compile error, got {other:?}"),
        }
        assert_eq!(gl.count(|c| matches!(c, Call::LinkProgram(_))), 0);
        assert_eq!(gl.live_shader_count(), 0);
    }

    #[test]
    fn link_failure_deletes_program_and_reports_log() {
        let gl = RecordingBackend::new().fail_link("varying mismatch");
        let err = create_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER).unwrap_err();
        assert!(matches!(&err, ShaderError::LinkError(log) if log == "varying mismatch"));
        assert_eq!(gl.count(|c| matches!(c, Call::DeleteProgram(_))), 1);
        assert_eq!(gl.live_program_count(), 0);
        assert_eq!(gl.live_shader_count(), 0);
    }
}
