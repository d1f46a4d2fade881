use super::super::gl;

/// Attribute slot a shader input is bound to.
///
/// Shaders are expected to declare their inputs with matching
/// `layout(location = N)` qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum VertexAttrib {
    Position = 0,
    Normal = 1,
    TexCoord = 2,
    Color = 3,
    Tangent = 4,
    Bitangent = 5,
    Joints = 6,
    Weights = 7,
}

impl VertexAttrib {
    pub const ALL: [VertexAttrib; 8] = [
        VertexAttrib::Position,
        VertexAttrib::Normal,
        VertexAttrib::TexCoord,
        VertexAttrib::Color,
        VertexAttrib::Tangent,
        VertexAttrib::Bitangent,
        VertexAttrib::Joints,
        VertexAttrib::Weights,
    ];

    #[inline]
    pub fn index(self) -> gl::GLuint {
        self as gl::GLuint
    }
}

impl From<VertexAttrib> for gl::GLuint {
    fn from(attrib: VertexAttrib) -> Self {
        attrib.index()
    }
}
