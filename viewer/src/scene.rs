use anyhow::anyhow;
use renderer::gl;
use renderer::{DataType, VertexArray, VertexArrayState, VertexAttrib};
use std::fmt;

const VERTEX_SHADER: &str = r#"#version 330 core
layout(location = 0) in vec3 position;
layout(location = 3) in vec3 color;
out vec3 v_color;
void main() {
    v_color = color;
    gl_Position = vec4(position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec3 v_color;
out vec4 frag_color;
void main() {
    frag_color = vec4(v_color, 1.0);
}
"#;

/// Floats per vertex: position.xyz followed by color.rgb.
const VERTEX_SIZE: i32 = 6;

#[rustfmt::skip]
const TRIANGLE: [f32; 18] = [
    -0.5, -0.5, 0.0,   1.0, 0.0, 0.0,
     0.5, -0.5, 0.0,   0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,   0.0, 0.0, 1.0,
];

fn create_shader(source: &str, xtype: gl::GLenum) -> Result<gl::GLuint, String> {
    let shader = gl::create_shader(xtype);
    gl::shader_source(shader, source);
    gl::compile_shader(shader);

    if gl::get_shader_iv(shader, gl::COMPILE_STATUS) == gl::GLint::from(gl::TRUE) {
        Ok(shader)
    } else {
        let log = gl::get_shader_info_log(shader);
        gl::delete_shader(shader);

        Err(log)
    }
}

fn create_program(vertex: &str, fragment: &str) -> Result<gl::GLuint, String> {
    let vs = create_shader(vertex, gl::VERTEX_SHADER)?;
    let fs = match create_shader(fragment, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(log) => {
            gl::delete_shader(vs);
            return Err(log);
        }
    };

    let program = gl::create_program();
    gl::attach_shader(program, vs);
    gl::attach_shader(program, fs);
    gl::link_program(program);
    gl::delete_shader(vs);
    gl::delete_shader(fs);

    if gl::get_program_iv(program, gl::LINK_STATUS) == gl::GLint::from(gl::TRUE) {
        Ok(program)
    } else {
        let log = gl::get_program_info_log(program);
        gl::delete_program(program);

        Err(log)
    }
}

/// A single colored triangle.
pub struct Scene {
    name: String,
    clear_color: [f32; 4],
    vertex_array: VertexArray,
    vertex_buffer: gl::GLuint,
    program: gl::GLuint,
    vertex_count: usize,
}

impl Scene {
    pub fn triangle(
        vertex_arrays: &mut VertexArrayState,
        clear_color: [f32; 4],
    ) -> anyhow::Result<Self> {
        let program = create_program(VERTEX_SHADER, FRAGMENT_SHADER)
            .map_err(|log| anyhow!("cannot build the triangle program: {}", log))?;

        let vertex_array = vertex_arrays.create();
        vertex_arrays.bind(&vertex_array);

        let vertex_buffer = gl::gen_buffers(1);
        gl::bind_buffer(gl::ARRAY_BUFFER, vertex_buffer);
        gl::buffer_data(gl::ARRAY_BUFFER, &TRIANGLE, gl::STATIC_DRAW);

        vertex_arrays
            .enable(VertexAttrib::Position)
            .enable(VertexAttrib::Color);
        vertex_arrays.pointer(VertexAttrib::Position, DataType::Float, 3, VERTEX_SIZE, 0);
        vertex_arrays.pointer(
            VertexAttrib::Color,
            DataType::Float,
            3,
            VERTEX_SIZE,
            3 * DataType::Float.size_of(),
        );

        vertex_arrays.unbind();
        gl::bind_buffer(gl::ARRAY_BUFFER, 0);

        let scene = Self {
            name: "triangle".to_string(),
            clear_color,
            vertex_array,
            vertex_buffer,
            program,
            vertex_count: TRIANGLE.len() / VERTEX_SIZE as usize,
        };

        gl::check_error().map_err(|err| anyhow!("triangle setup failed: {}", err))?;

        Ok(scene)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn draw(&self, vertex_arrays: &mut VertexArrayState) {
        let [red, green, blue, alpha] = self.clear_color;
        gl::clear_color(red, green, blue, alpha);
        gl::clear(gl::COLOR_BUFFER_BIT);

        gl::use_program(self.program);
        vertex_arrays.bind(&self.vertex_array);
        gl::draw_arrays(gl::TRIANGLES, 0, self.vertex_count);
        vertex_arrays.unbind();
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        gl::delete_buffers(self.vertex_buffer);
        gl::delete_program(self.program);
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Scene {}: {:?}>", self.name, self.vertex_array)
    }
}
