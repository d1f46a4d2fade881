use super::gl;
use thiserror::Error;

// Dropped from the 3.2+ core registry, still reported by compatibility and 4.3+ contexts.
const STACK_OVERFLOW: gl::GLenum = 0x0503;
const STACK_UNDERFLOW: gl::GLenum = 0x0504;

/// An error code reported by `glGetError`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    #[error("GL_INVALID_ENUM: an enum argument is out of range")]
    InvalidEnum,
    #[error("GL_INVALID_VALUE: a numeric argument is out of range")]
    InvalidValue,
    #[error("GL_INVALID_OPERATION: the operation is not allowed in the current state")]
    InvalidOperation,
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION: the framebuffer object is not complete")]
    InvalidFramebufferOperation,
    #[error("unknown GL error code 0x{0:04X}")]
    Unknown(gl::GLenum),
}

impl GlError {
    pub fn from_code(code: gl::GLenum) -> Self {
        match code {
            gl::INVALID_ENUM => GlError::InvalidEnum,
            gl::INVALID_VALUE => GlError::InvalidValue,
            gl::INVALID_OPERATION => GlError::InvalidOperation,
            STACK_OVERFLOW => GlError::StackOverflow,
            STACK_UNDERFLOW => GlError::StackUnderflow,
            gl::OUT_OF_MEMORY => GlError::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            other => GlError::Unknown(other),
        }
    }

    pub fn code(&self) -> gl::GLenum {
        match self {
            GlError::InvalidEnum => gl::INVALID_ENUM,
            GlError::InvalidValue => gl::INVALID_VALUE,
            GlError::InvalidOperation => gl::INVALID_OPERATION,
            GlError::StackOverflow => STACK_OVERFLOW,
            GlError::StackUnderflow => STACK_UNDERFLOW,
            GlError::OutOfMemory => gl::OUT_OF_MEMORY,
            GlError::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GlError::Unknown(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_codes() {
        assert_eq!(GlError::from_code(0x0500), GlError::InvalidEnum);
        assert_eq!(GlError::from_code(0x0502), GlError::InvalidOperation);
        assert_eq!(GlError::from_code(0x0503), GlError::StackOverflow);
        assert_eq!(GlError::from_code(0x0504), GlError::StackUnderflow);
        assert_eq!(GlError::from_code(0x0505), GlError::OutOfMemory);
        assert_eq!(
            GlError::from_code(0x0506),
            GlError::InvalidFramebufferOperation
        );
    }

    #[test]
    fn codes_survive_a_decode() {
        for code in 0x0500..=0x0506 {
            assert_eq!(GlError::from_code(code).code(), code);
        }
    }

    #[test]
    fn keeps_unknown_codes() {
        let error = GlError::from_code(0x1234);
        assert_eq!(error, GlError::Unknown(0x1234));
        assert_eq!(error.code(), 0x1234);
        assert_eq!(error.to_string(), "unknown GL error code 0x1234");
    }
}
