use crate::geometry::Geometry;
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    /// Activates `program` unless it already is the active one.
    pub fn use_program(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            program.activate();
            self.current_program = p_id;
        }
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        self.use_program(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(
                geometry.primitive().gl_mode(),
                0,
                geometry.vertices() as i32,
            );
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    /// Lets vertex shaders set `gl_PointSize`.
    pub fn enable_program_point_size(&self) {
        unsafe { gl::Enable(gl::PROGRAM_POINT_SIZE) }
    }

    pub fn enable_depth_test(&self) {
        unsafe { gl::Enable(gl::DEPTH_TEST) }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
