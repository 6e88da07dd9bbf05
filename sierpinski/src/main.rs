use cgmath::Point2;

use clap::Parser;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use gasket::Triangle;

use gl_wrapper::context::{GlContext, WindowSettings};
use gl_wrapper::geometry::{Geometry, GeometryBuilder, Primitive, VertexAttribute};
use gl_wrapper::logging::{init_logging, LoggingConfig};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

mod args;

use args::Args;

const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
uniform float pointSize;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
    gl_PointSize = pointSize;
}";

const FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(0.21f, 0.0f, 0.25f, 1.0f);
}";

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    init_logging(LoggingConfig { filter: args.log });

    let seed = args.seed.unwrap_or_else(gasket::time_seed);
    log::info!("gasket seed {seed}");

    let mut rng = SmallRng::seed_from_u64(seed);
    let points = gasket::generate(
        args.iterations,
        &Triangle::default(),
        Point2::new(0.0, 0.0),
        &mut rng,
    );
    let vertices = gasket::flatten(&points);

    let event_loop = EventLoop::new();
    let settings = WindowSettings {
        title: String::from("Sierpinski gasket"),
        width: args.width,
        height: args.height,
        ..Default::default()
    };

    let context = match GlContext::new(&event_loop, &settings) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Could not create GL context: {e}");
            std::process::exit(-1);
        }
    };

    let program = match ProgramBuilder::new(VERTEX_SHADER, FRAGMENT_SHADER).build() {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("{e}");
            None
        }
    };

    let geometry = match GeometryBuilder::new(&vertices)
        .with_attribute(VertexAttribute::Vec3)
        .with_primitive(Primitive::Points)
        .build()
    {
        Ok(g) => g,
        Err(e) => {
            log::error!("Could not upload gasket points: {e}");
            std::process::exit(-1);
        }
    };

    let mut gl_renderer = GlRenderer::new();
    gl_renderer.enable_program_point_size();

    let mut scene = Some((geometry, program));
    let point_size = args.point_size;

    event_loop.run(move |event, _window_target, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::MainEventsCleared => context.gl_window.window.request_redraw(),
            Event::RedrawRequested(_) => {
                gl_renderer.clear_color(0.0, 0.0, 0.0);

                if let Some((geometry, Some(program))) = &scene {
                    draw(&mut gl_renderer, geometry, program, point_size);
                }

                if let Err(e) = context.swap_buffers() {
                    log::error!("Could not swap buffers: {e}");
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    context.resize(size.width, size.height);
                    gl_renderer.resize(size.width, size.height);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                        && input.state == ElementState::Pressed
                    {
                        control_flow.set_exit();
                    }
                }
                WindowEvent::CloseRequested => control_flow.set_exit(),
                _ => (),
            },
            Event::LoopDestroyed => {
                // GPU objects go before the context does
                scene.take();
                log::debug!("released gasket buffers and program");
            }
            _ => (),
        }
    })
}

fn draw(renderer: &mut GlRenderer, geometry: &Geometry, program: &Program, point_size: f32) {
    renderer.use_program(program);
    program.set_uniform("pointSize", point_size);
    renderer.draw(geometry, program);
}
