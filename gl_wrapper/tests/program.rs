//! Checks against a real driver. They open a hidden window, so they only run on request:
//! `cargo test -p gl_wrapper -- --ignored`.
#![cfg(all(unix, not(target_os = "macos")))]

use cgmath::{Matrix4, SquareMatrix, Vector3};

use winit::event_loop::EventLoopBuilder;
use winit::platform::unix::EventLoopBuilderExtUnix;

use gl_wrapper::context::{GlContext, WindowSettings};
use gl_wrapper::geometry::{GeometryBuilder, Primitive, VertexAttribute};
use gl_wrapper::program::{PBError, ProgramBuilder, ShaderStage, INFO_LOG_LEN};
use gl_wrapper::renderer::GlRenderer;

const VERT: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
uniform mat4 m;
void main()
{
    gl_Position = m * vec4(aPos, 1.0);
}";

const FRAG: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 ourColor;
void main()
{
    FragColor = ourColor;
}";

const BROKEN_VERT: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos, 1.0)
}";

// both stages compile, but the interface types disagree
const MISMATCHED_VERT: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
out vec3 v;
void main()
{
    v = aPos;
    gl_Position = vec4(aPos, 1.0);
}";

const MISMATCHED_FRAG: &str = "#version 330 core
in vec4 v;
out vec4 FragColor;
void main()
{
    FragColor = v;
}";

const BROKEN_FRAG: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0)
}";

fn gl_error() -> u32 {
    unsafe { gl::GetError() }
}

// winit allows a single event loop per process, so every check shares one context.
#[test]
#[ignore = "needs a display"]
fn programs_on_real_driver() {
    let event_loop = EventLoopBuilder::new().with_any_thread(true).build();
    let settings = WindowSettings {
        title: String::from("gl_wrapper test"),
        width: 64,
        height: 64,
        visible: false,
        ..Default::default()
    };
    let context = GlContext::new(&event_loop, &settings).unwrap();

    // passthrough program links and draws
    let program = ProgramBuilder::new(VERT, FRAG).build().unwrap();
    let data = [-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0];
    let triangle = GeometryBuilder::new(&data)
        .with_attribute(VertexAttribute::Vec3)
        .with_primitive(Primitive::Triangles)
        .build()
        .unwrap();
    let mut renderer = GlRenderer::new();

    renderer.use_program(&program);
    program.set_uniform("m", Matrix4::<f32>::identity());
    program.set_uniform("ourColor", (1.0_f32, 0.5_f32, 0.0_f32, 1.0_f32));
    renderer.clear_color(0.0, 0.0, 0.0);
    renderer.draw(&triangle, &program);
    assert_eq!(gl_error(), gl::NO_ERROR);

    // unknown uniforms are ignored
    assert_eq!(program.uniform_location("nonexistent_name"), None);
    program.set_uniform("nonexistent_name", 1.0_f32);
    program.set_uniform("bad\0name", 1.0_f32);
    assert_eq!(gl_error(), gl::NO_ERROR);

    // matrices read back unchanged
    program.set_uniform("m", Matrix4::<f32>::identity());
    assert_eq!(program.get_uniform_mat4("m"), Some(Matrix4::identity()));

    let translation = Matrix4::from_translation(Vector3::new(0.25_f32, -0.5, 0.0));
    program.set_uniform("m", translation);
    assert_eq!(program.get_uniform_mat4("m"), Some(translation));

    // compile errors come back as values, one per broken stage
    match ProgramBuilder::new(VERT, BROKEN_FRAG).build() {
        Err(PBError::Compilation(failures)) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].stage, ShaderStage::Fragment);
            assert!(failures[0].log.len() <= INFO_LOG_LEN);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("broken shader compiled"),
    }

    match ProgramBuilder::new(BROKEN_VERT, FRAG).build() {
        Err(PBError::Compilation(failures)) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].stage, ShaderStage::Vertex);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("broken shader compiled"),
    }

    match ProgramBuilder::new(BROKEN_VERT, BROKEN_FRAG).build() {
        Err(PBError::Compilation(failures)) => {
            let stages: Vec<_> = failures.iter().map(|f| f.stage).collect();
            assert_eq!(stages, vec![ShaderStage::Vertex, ShaderStage::Fragment]);
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("broken shaders compiled"),
    }
    assert_eq!(gl_error(), gl::NO_ERROR);

    // stages that compile but don't fit together fail at link time
    match ProgramBuilder::new(MISMATCHED_VERT, MISMATCHED_FRAG).build() {
        Err(PBError::Linking { log }) => assert!(log.len() <= INFO_LOG_LEN),
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("mismatched stages linked"),
    }

    // the failed build released everything it created
    assert_eq!(gl_error(), gl::NO_ERROR);
    assert!(program.uniform_location("m").is_some());

    drop(triangle);
    drop(program);
    context.swap_buffers().unwrap();
}
