pub mod context;
pub mod geometry;
pub mod logging;
pub mod program;
pub mod renderer;
pub mod uniform;
