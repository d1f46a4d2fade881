use crate::config::ViewerConfig;
use crate::events::EventSystem;
use anyhow::anyhow;
use glutin::dpi::PhysicalSize;
use glutin::{ContextBuilder, ContextWrapper, GlProfile, GlRequest, PossiblyCurrent};
use renderer::gl;
use std::fmt;
use winit::window::{Window, WindowBuilder};

pub struct WindowContext {
    pub window_context: ContextWrapper<PossiblyCurrent, Window>,
}

impl WindowContext {
    /// Opens the window, makes its GL 3.3 core context current on this
    /// thread and loads the GL entry points.
    pub fn from_event_loop(event_loop: &EventSystem, config: &ViewerConfig) -> anyhow::Result<Self> {
        let wb = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let window_context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(config.vsync)
            .build_windowed(wb, &event_loop.event_loop)
            .map_err(|err| anyhow!("cannot create an OpenGL 3.3 window: {}", err))?;

        let window_context = unsafe { window_context.make_current() }
            .map_err(|(_, err)| anyhow!("cannot make the GL context current: {:?}", err))?;

        gl::init_from_window(&window_context);
        log::info!(
            "OpenGL {} ({})",
            gl::get_string(gl::VERSION),
            gl::get_string(gl::RENDERER)
        );

        let value = Self { window_context };
        value.resize(PhysicalSize::new(config.width, config.height));

        Ok(value)
    }

    pub fn swap_buffers(&self) -> anyhow::Result<()> {
        self.window_context
            .swap_buffers()
            .map_err(|err| anyhow!("cannot swap buffers: {:?}", err))
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.window_context.resize(size);
        gl::viewport(0, 0, size.width, size.height);
    }
}

impl fmt::Debug for WindowContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<WindowContext: {:p}>", self)
    }
}
