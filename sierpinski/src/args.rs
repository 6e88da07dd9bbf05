use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Amount of chaos game steps
    #[arg(short, long, default_value_t = 10_000)]
    pub iterations: usize,
    /// Seed for the vertex choice (wall clock when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Rendered size of every point, in pixels
    #[arg(long, default_value_t = 5.0)]
    pub point_size: f32,
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
