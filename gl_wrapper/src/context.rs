use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{Window, WindowBuilder};

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Request a 24 bit depth buffer.
    pub depth: bool,
    pub visible: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("OpenGL"),
            width: 1440,
            height: 1080,
            depth: false,
            visible: true,
        }
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, ContextError> {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(ContextError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(ContextError::ZeroSize)?,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }

    /// Zero sized requests (minimized windows) are ignored.
    pub fn resize(&self, context: &PossiblyCurrentContext, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(context, w, h);
        }
    }

    pub fn swap_buffers(&self, context: &PossiblyCurrentContext) -> Result<(), ContextError> {
        self.surface.swap_buffers(context)?;
        Ok(())
    }
}

/// Window with a current OpenGL 3.3 context and loaded function pointers.
pub struct GlContext {
    // dropped before the surface it was made current on
    pub gl_context: PossiblyCurrentContext,
    pub gl_window: GlWindow,
}

impl GlContext {
    pub fn new<T>(
        event_loop: &EventLoopWindowTarget<T>,
        settings: &WindowSettings,
    ) -> Result<Self, ContextError> {
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                settings.width,
                settings.height,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_visible(settings.visible)
            .with_title(&settings.title);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template =
            ConfigTemplateBuilder::new().with_depth_size(if settings.depth { 24 } else { 0 });

        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                // glutin turns a template without matches into `BadConfig` before this runs,
                // so the list is only empty when EGL filtered out every window-incompatible
                // config. The picker has to return a config, there is no error to hand back.
                configs
                    .next()
                    .expect("no GL config is compatible with the window")
            })
            .map_err(|e| ContextError::Display(e.to_string()))?;

        let window = window.ok_or(ContextError::NoWindow)?;
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(window.raw_window_handle()));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| match CString::new(s) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });

        log::info!(
            "created {}x{} window \"{}\" with an OpenGL context",
            settings.width,
            settings.height,
            settings.title
        );

        Ok(Self {
            gl_context,
            gl_window,
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.gl_window.resize(&self.gl_context, width, height);
    }

    pub fn swap_buffers(&self) -> Result<(), ContextError> {
        self.gl_window.swap_buffers(&self.gl_context)
    }
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("could not create display: {0}")]
    Display(String),
    #[error("display did not create a window")]
    NoWindow,
    #[error("window has zero size")]
    ZeroSize,
    #[error(transparent)]
    Gl(#[from] glutin::error::Error),
}
