pub mod context;
pub mod gl;
mod gl_error;

pub use context::*;
pub use gl_error::*;
