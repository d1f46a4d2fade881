use glutin::{Context, ContextWrapper, PossiblyCurrent};
use std::ffi::CStr;
use std::os::raw::c_void;
use winit::window::Window;

use super::GlError;

mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

pub use self::gl::types::*;
pub use self::gl::*;

#[inline]
pub fn init_from_window(window_context: &ContextWrapper<PossiblyCurrent, Window>) {
    init_from_context(window_context.context());
}

#[inline]
pub fn init_from_context(context: &Context<PossiblyCurrent>) {
    load_with(|ptr| context.get_proc_address(ptr) as *const _);
}

#[inline]
pub fn get_string(name: GLenum) -> String {
    unsafe {
        let raw = GetString(name);
        if raw.is_null() {
            return String::new();
        }

        CStr::from_ptr(raw as *const _).to_string_lossy().into_owned()
    }
}

/// Pops one code off the driver's error queue.
#[inline]
pub fn get_error() -> GLenum {
    unsafe { GetError() }
}

/// Drains the driver's error queue and reports the first error found.
pub fn check_error() -> Result<(), GlError> {
    let first = get_error();
    if first == NO_ERROR {
        return Ok(());
    }

    // Each error flag is reported once; a lost context may keep reporting.
    for _ in 0..16 {
        if get_error() == NO_ERROR {
            break;
        }
    }

    Err(GlError::from_code(first))
}

#[inline]
pub fn gen_vertex_arrays(count: i32) -> GLuint {
    unsafe {
        let mut vao = 0;
        GenVertexArrays(count, &mut vao);
        vao
    }
}

#[inline]
pub fn delete_vertex_arrays(array: GLuint) {
    unsafe {
        DeleteVertexArrays(1, &array);
    }
}

#[inline]
pub fn bind_vertex_array(array: GLuint) {
    unsafe {
        BindVertexArray(array);
    }
}

#[inline]
pub fn is_vertex_array(array: GLuint) -> bool {
    unsafe { IsVertexArray(array) == TRUE }
}

#[inline]
pub fn enable_vertex_attrib_array(attrib_location: GLuint) {
    unsafe {
        EnableVertexAttribArray(attrib_location);
    }
}

#[inline]
pub fn disable_vertex_attrib_array(attrib_location: GLuint) {
    unsafe {
        DisableVertexAttribArray(attrib_location);
    }
}

#[inline]
pub fn get_vertex_attrib_iv(index: GLuint, pname: GLenum) -> GLint {
    unsafe {
        let mut params: GLint = 0;
        GetVertexAttribiv(index, pname, &mut params);
        params
    }
}

#[inline]
pub fn vertex_attrib_pointer(
    index: GLuint,
    size: GLint,
    type_: GLenum,
    normalized: GLboolean,
    stride: GLsizei,
    offset: usize,
) {
    unsafe { VertexAttribPointer(index, size, type_, normalized, stride, offset as *const c_void) }
}

#[inline]
pub fn gen_buffers(count: i32) -> GLuint {
    unsafe {
        let mut vbo = 0;
        GenBuffers(count, &mut vbo);
        vbo
    }
}

#[inline]
pub fn delete_buffers(buffer: GLuint) {
    unsafe {
        DeleteBuffers(1, &buffer);
    }
}

#[inline]
pub fn bind_buffer(target: GLenum, buffer: GLuint) {
    unsafe {
        BindBuffer(target, buffer);
    }
}

#[inline]
pub fn buffer_data<T>(target: GLenum, data: &[T], usage: GLenum) {
    unsafe {
        BufferData(
            target,
            (data.len() * std::mem::size_of::<T>()) as GLsizeiptr,
            data.as_ptr() as *const _,
            usage,
        );
    }
}

#[inline]
pub fn create_shader(xtype: GLenum) -> GLuint {
    unsafe { CreateShader(xtype) }
}

#[inline]
pub fn shader_source(shader: GLuint, source: &str) {
    unsafe {
        let len: [GLint; 1] = [source.len() as GLint];

        ShaderSource(shader, 1, &(source.as_ptr() as *const _), len.as_ptr());
    }
}

#[inline]
pub fn compile_shader(shader: GLuint) {
    unsafe {
        CompileShader(shader);
    }
}

#[inline]
pub fn get_shader_iv(shader: GLuint, pname: GLenum) -> GLint {
    unsafe {
        let mut params: GLint = 0;
        GetShaderiv(shader, pname, &mut params);
        params
    }
}

#[inline]
pub fn get_shader_info_log(shader: GLuint) -> String {
    let buf_size = get_shader_iv(shader, INFO_LOG_LENGTH);
    unsafe {
        let mut actual_length: GLint = 0;
        let mut buf: Vec<u8> = Vec::with_capacity(buf_size.max(0) as usize);

        GetShaderInfoLog(
            shader,
            buf_size,
            &mut actual_length,
            buf.as_mut_ptr() as *mut _,
        );

        buf.set_len(actual_length.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[inline]
pub fn delete_shader(shader: GLuint) {
    unsafe {
        DeleteShader(shader);
    }
}

#[inline]
pub fn create_program() -> GLuint {
    unsafe { CreateProgram() }
}

#[inline]
pub fn attach_shader(program: GLuint, shader: GLuint) {
    unsafe {
        AttachShader(program, shader);
    }
}

#[inline]
pub fn link_program(program: GLuint) {
    unsafe {
        LinkProgram(program);
    }
}

#[inline]
pub fn get_program_iv(program: GLuint, pname: GLenum) -> GLint {
    unsafe {
        let mut params: GLint = 0;
        GetProgramiv(program, pname, &mut params);
        params
    }
}

#[inline]
pub fn get_program_info_log(program: GLuint) -> String {
    let buf_size = get_program_iv(program, INFO_LOG_LENGTH);
    unsafe {
        let mut actual_length: GLint = 0;
        let mut buf: Vec<u8> = Vec::with_capacity(buf_size.max(0) as usize);

        GetProgramInfoLog(
            program,
            buf_size,
            &mut actual_length,
            buf.as_mut_ptr() as *mut _,
        );

        buf.set_len(actual_length.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[inline]
pub fn use_program(program: GLuint) {
    unsafe {
        UseProgram(program);
    }
}

#[inline]
pub fn delete_program(program: GLuint) {
    unsafe {
        DeleteProgram(program);
    }
}

#[inline]
pub fn clear_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    unsafe {
        ClearColor(red, green, blue, alpha);
    }
}

#[inline]
pub fn clear(mask: GLbitfield) {
    unsafe {
        Clear(mask);
    }
}

#[inline]
pub fn draw_arrays(mode: GLenum, first: GLint, count: usize) {
    unsafe {
        DrawArrays(mode, first, count as GLsizei);
    }
}

#[inline]
pub fn viewport(x: i32, y: i32, width: u32, height: u32) {
    unsafe {
        Viewport(x, y, width as GLsizei, height as GLsizei);
    }
}
