pub mod state;
#[cfg(any(target_os = "linux",))]
#[path = "gl_backend_renderer/mod.rs"]
pub mod renderer;

pub use self::renderer::*;
pub use state::*;
