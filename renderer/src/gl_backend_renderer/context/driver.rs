use super::super::gl;
use std::marker::PhantomData;

/// Driver entry points the vertex array layer is built on.
///
/// Every method maps to exactly one GL call. Implementations must not add
/// validation; misuse has whatever effect the driver gives it.
pub trait VertexArrayDriver: Clone {
    fn gen_vertex_array(&self) -> gl::GLuint;
    fn delete_vertex_array(&self, array: gl::GLuint);
    fn bind_vertex_array(&self, array: gl::GLuint);
    fn enable_vertex_attrib_array(&self, index: gl::GLuint);
    fn disable_vertex_attrib_array(&self, index: gl::GLuint);

    fn vertex_attrib_pointer(
        &self,
        index: gl::GLuint,
        size: gl::GLint,
        type_: gl::GLenum,
        normalized: gl::GLboolean,
        stride: gl::GLsizei,
        offset: usize,
    );

    /// `glIsVertexArray`.
    fn is_vertex_array(&self, array: gl::GLuint) -> bool;

    /// `GL_VERTEX_ATTRIB_ARRAY_ENABLED` for the currently bound vertex array.
    fn is_attrib_enabled(&self, index: gl::GLuint) -> bool;
}

/// The loaded GL function pointers of the current thread's context.
///
/// Not `Send`: a context is current on one thread only.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlDriver {
    _thread_bound: PhantomData<*const ()>,
}

impl GlDriver {
    pub fn new() -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }
}

impl VertexArrayDriver for GlDriver {
    fn gen_vertex_array(&self) -> gl::GLuint {
        gl::gen_vertex_arrays(1)
    }

    fn delete_vertex_array(&self, array: gl::GLuint) {
        gl::delete_vertex_arrays(array);
    }

    fn bind_vertex_array(&self, array: gl::GLuint) {
        gl::bind_vertex_array(array);
    }

    fn enable_vertex_attrib_array(&self, index: gl::GLuint) {
        gl::enable_vertex_attrib_array(index);
    }

    fn disable_vertex_attrib_array(&self, index: gl::GLuint) {
        gl::disable_vertex_attrib_array(index);
    }

    fn vertex_attrib_pointer(
        &self,
        index: gl::GLuint,
        size: gl::GLint,
        type_: gl::GLenum,
        normalized: gl::GLboolean,
        stride: gl::GLsizei,
        offset: usize,
    ) {
        gl::vertex_attrib_pointer(index, size, type_, normalized, stride, offset);
    }

    fn is_vertex_array(&self, array: gl::GLuint) -> bool {
        gl::is_vertex_array(array)
    }

    fn is_attrib_enabled(&self, index: gl::GLuint) -> bool {
        gl::get_vertex_attrib_iv(index, gl::VERTEX_ATTRIB_ARRAY_ENABLED) != 0
    }
}
