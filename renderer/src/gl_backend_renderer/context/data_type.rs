use super::super::gl;
use std::convert::TryFrom;
use thiserror::Error;

/// Component type of a vertex attribute, as understood by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    HalfFloat,
    Int,
    UnsignedInt,
    Float,
    Double,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("0x{0:04X} is not a vertex attribute component type")]
pub struct UnknownDataType(pub gl::GLenum);

impl DataType {
    pub const ALL: [DataType; 9] = [
        DataType::Byte,
        DataType::UnsignedByte,
        DataType::Short,
        DataType::UnsignedShort,
        DataType::HalfFloat,
        DataType::Int,
        DataType::UnsignedInt,
        DataType::Float,
        DataType::Double,
    ];

    /// Size of one component in bytes.
    pub fn size_of(self) -> usize {
        match self {
            DataType::Byte | DataType::UnsignedByte => 1,
            DataType::Short | DataType::UnsignedShort | DataType::HalfFloat => 2,
            DataType::Int | DataType::UnsignedInt | DataType::Float => 4,
            DataType::Double => 8,
        }
    }

    pub fn gl_enum(self) -> gl::GLenum {
        match self {
            DataType::Byte => gl::BYTE,
            DataType::UnsignedByte => gl::UNSIGNED_BYTE,
            DataType::Short => gl::SHORT,
            DataType::UnsignedShort => gl::UNSIGNED_SHORT,
            DataType::HalfFloat => gl::HALF_FLOAT,
            DataType::Int => gl::INT,
            DataType::UnsignedInt => gl::UNSIGNED_INT,
            DataType::Float => gl::FLOAT,
            DataType::Double => gl::DOUBLE,
        }
    }
}

impl TryFrom<gl::GLenum> for DataType {
    type Error = UnknownDataType;

    fn try_from(value: gl::GLenum) -> Result<Self, Self::Error> {
        DataType::ALL
            .iter()
            .copied()
            .find(|data_type| data_type.gl_enum() == value)
            .ok_or(UnknownDataType(value))
    }
}
