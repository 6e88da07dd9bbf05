use std::time::Instant;

use clap::Parser;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use gl_wrapper::context::{GlContext, WindowSettings};
use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::logging::{init_logging, LoggingConfig};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

mod args;
mod scene;

use args::Args;
use scene::Scene;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    init_logging(LoggingConfig { filter: args.log });

    let scene: Scene = args.scene.into();
    let pulse = args.pulse || scene.always_pulses();

    let event_loop = EventLoop::new();
    let settings = WindowSettings {
        title: String::from("Colored cube"),
        width: args.width,
        height: args.height,
        depth: scene.needs_depth(),
        ..Default::default()
    };

    let context = match GlContext::new(&event_loop, &settings) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Could not create GL context: {e}");
            std::process::exit(-1);
        }
    };

    let program = match ProgramBuilder::from_paths(&args.vertex, &args.fragment)
        .and_then(ProgramBuilder::build)
    {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("{e}");
            None
        }
    };

    let vertices = scene.vertices();
    log::info!(
        "drawing {scene:?} with {} vertices",
        vertices.len() / scene::VERTEX_LEN
    );
    let geometry = match GeometryBuilder::new(&vertices)
        .with_attribute(VertexAttribute::Vec3)
        .with_attribute(VertexAttribute::Vec3)
        .build()
    {
        Ok(g) => g,
        Err(e) => {
            log::error!("Could not upload {scene:?} vertices: {e}");
            std::process::exit(-1);
        }
    };

    let mut gl_renderer = GlRenderer::new();
    if scene.needs_depth() {
        gl_renderer.enable_depth_test();
    }

    let mut aspect_ratio = args.width as f32 / args.height as f32;
    let mut resources = Some((geometry, program));
    let start = Instant::now();

    event_loop.run(move |event, _window_target, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::MainEventsCleared => context.gl_window.window.request_redraw(),
            Event::RedrawRequested(_) => {
                gl_renderer.clear_color(0.0, 0.0, 0.0);

                if let Some((geometry, Some(program))) = &resources {
                    let frame = Frame {
                        scene,
                        seconds: start.elapsed().as_secs_f32(),
                        aspect_ratio,
                        pulse,
                    };
                    frame.draw(&mut gl_renderer, geometry, program);
                }

                if let Err(e) = context.swap_buffers() {
                    log::error!("Could not swap buffers: {e}");
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    if size.width != 0 && size.height != 0 {
                        context.resize(size.width, size.height);
                        gl_renderer.resize(size.width, size.height);
                        aspect_ratio = size.width as f32 / size.height as f32;
                    }
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
                resources.take();
                log::debug!("released cube buffers and program");
            }
            _ => (),
        }
    })
}

struct Frame {
    scene: Scene,
    seconds: f32,
    aspect_ratio: f32,
    pulse: bool,
}

impl Frame {
    fn draw(&self, renderer: &mut GlRenderer, geometry: &Geometry, program: &Program) {
        renderer.use_program(program);

        program.set_uniform("model", self.scene.model(self.seconds));
        program.set_uniform("view", self.scene.view());
        program.set_uniform("projection", self.scene.projection(self.aspect_ratio));
        program.set_uniform("pulse", self.pulse);
        program.set_uniform("ourColor", scene::pulse_color(self.seconds));

        renderer.draw(geometry, program);
    }
}
