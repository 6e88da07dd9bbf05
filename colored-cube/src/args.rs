use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::scene::Scene;

#[derive(Debug, Parser)]
pub struct Args {
    /// What to draw
    #[arg(value_enum, default_value_t = SceneArg::Cube)]
    pub scene: SceneArg,
    /// Path to the vertex shader
    #[arg(long, default_value_os_t = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertex.vert")))]
    pub vertex: PathBuf,
    /// Path to the fragment shader
    #[arg(long, default_value_os_t = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/fragment.frag")))]
    pub fragment: PathBuf,
    /// Tint the cube with the pulsing color as well
    #[arg(long)]
    pub pulse: bool,
    /// Width of the window
    #[arg(long, default_value_t = 1440)]
    pub width: u32,
    /// Height of the window
    #[arg(long, default_value_t = 1080)]
    pub height: u32,
    /// Log filter, e.g. "debug" or "gl_wrapper=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SceneArg {
    Triangle,
    Cube,
}

impl From<SceneArg> for Scene {
    fn from(s: SceneArg) -> Self {
        match s {
            SceneArg::Triangle => Self::Triangle,
            SceneArg::Cube => Self::Cube,
        }
    }
}
