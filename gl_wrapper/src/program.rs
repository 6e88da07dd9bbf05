use std::ffi::{c_char, CStr, CString};
use std::fmt;
use std::path::{Path, PathBuf};

use cgmath::Matrix4;
use gl::types::{GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

use crate::uniform::Uniform;

/// Compiler and linker diagnostics are cut to this many bytes.
pub const INFO_LOG_LEN: usize = 512;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

pub struct ProgramBuilder {
    vert: String,
    frag: String,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: vert_src.to_owned(),
            frag: frag_src.to_owned(),
        }
    }

    /// Reads both stages from disk.
    pub fn from_paths(
        vert_path: impl AsRef<Path>,
        frag_path: impl AsRef<Path>,
    ) -> Result<Self, PBError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| PBError::FileRead {
                path: path.to_owned(),
                source,
            })
        };

        let vert = read(vert_path.as_ref())?;
        let frag = read(frag_path.as_ref())?;

        log::debug!(
            "read shader sources from {:?} and {:?}",
            vert_path.as_ref(),
            frag_path.as_ref()
        );

        Ok(Self { vert, frag })
    }

    ///
    /// Compiles both stages and links them, vertex stage attached first.
    ///
    /// Both stages are always compiled, so a failure carries the log of every broken stage.
    /// Stage objects are released on every path, a failed link also releases the program.
    ///
    pub fn build(self) -> Result<Program, PBError> {
        let vert_src = source(ShaderStage::Vertex, self.vert)?;
        let frag_src = source(ShaderStage::Fragment, self.frag)?;

        let vert = Shader::compile(ShaderStage::Vertex, &vert_src);
        let frag = Shader::compile(ShaderStage::Fragment, &frag_src);

        let (vert, frag) = match (vert, frag) {
            (Ok(vert), Ok(frag)) => (vert, frag),
            (vert, frag) => {
                let failures = [vert.err(), frag.err()].into_iter().flatten().collect();
                return Err(PBError::Compilation(failures));
            }
        };

        let program = Program {
            id: unsafe { gl::CreateProgram() },
        };

        let mut success: GLint = 0;

        unsafe {
            gl::AttachShader(program.id, vert.id);
            gl::AttachShader(program.id, frag.id);
            gl::LinkProgram(program.id);

            gl::DetachShader(program.id, vert.id);
            gl::DetachShader(program.id, frag.id);

            gl::GetProgramiv(program.id, gl::LINK_STATUS, &mut success);
        }

        if success != gl::TRUE as GLint {
            let log = info_log(|len, written, buf| unsafe {
                gl::GetProgramInfoLog(program.id, len, written, buf)
            });

            return Err(PBError::Linking { log });
        }

        log::debug!("linked program {}", program.id);

        Ok(program)
    }
}

fn source(stage: ShaderStage, src: String) -> Result<CString, PBError> {
    CString::new(src).map_err(|_| PBError::InvalidSource { stage })
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("could not read shader source {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{stage} shader source contains a NUL byte")]
    InvalidSource { stage: ShaderStage },
    #[error("{}", join_failures(.0))]
    Compilation(Vec<StageError>),
    #[error("program failed to link:\n{log}")]
    Linking { log: String },
}

/// Compiler diagnostic of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} shader failed to compile:\n{log}")]
pub struct StageError {
    pub stage: ShaderStage,
    pub log: String,
}

fn join_failures(failures: &[StageError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

struct Shader {
    id: GLuint,
}

impl Shader {
    fn compile(stage: ShaderStage, src: &CStr) -> Result<Self, StageError> {
        let shader = Shader {
            id: unsafe { gl::CreateShader(stage.gl_kind()) },
        };

        let mut success: GLint = 0;

        unsafe {
            gl::ShaderSource(shader.id, 1, &src.as_ptr(), std::ptr::null());
            gl::CompileShader(shader.id);
            gl::GetShaderiv(shader.id, gl::COMPILE_STATUS, &mut success);
        }

        if success != gl::TRUE as GLint {
            let log = info_log(|len, written, buf| unsafe {
                gl::GetShaderInfoLog(shader.id, len, written, buf)
            });

            return Err(StageError { stage, log });
        }

        log::debug!("compiled {stage} shader {}", shader.id);

        Ok(shader)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

fn info_log(fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut c_char)) -> String {
    let mut buf = [0_u8; INFO_LOG_LEN];
    let mut written: GLsizei = 0;

    fetch(
        INFO_LOG_LEN as GLsizei,
        &mut written,
        buf.as_mut_ptr() as *mut c_char,
    );

    trim_log(&buf, written)
}

fn trim_log(buf: &[u8], written: GLsizei) -> String {
    let len = (written.max(0) as usize).min(buf.len());
    let data = buf[..len].split(|b| *b == 0).next().unwrap_or_default();

    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Linked shader program. Uniform setters write to the program that is currently active.
pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    pub fn activate(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    /// Location of an active uniform, looked up on every call.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let c_name = match CString::new(name) {
            Ok(n) => n,
            Err(_) => {
                log::warn!("uniform name {name:?} contains a NUL byte");
                return None;
            }
        };

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };

        (location != -1).then_some(location)
    }

    /// Writes `value` to the uniform `name`. Names that aren't active uniforms are ignored.
    pub fn set_uniform(&self, name: &str, value: impl Into<Uniform>) {
        if let Some(location) = self.uniform_location(name) {
            let value = value.into();
            log::trace!("setting {} uniform {name:?}", value.glsl_type());
            unsafe { value.upload(location) }
        }
    }

    pub fn get_uniform_mat4(&self, name: &str) -> Option<Matrix4<f32>> {
        let location = self.uniform_location(name)?;
        let mut columns = [[0.0_f32; 4]; 4];

        unsafe {
            gl::GetUniformfv(self.id, location, columns.as_mut_ptr() as *mut f32);
        }

        Some(Matrix4::from(columns))
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
