mod data_type;
mod driver;
mod vertex_array_state;
mod vertex_attrib;

pub use data_type::*;
pub use driver::*;
pub use vertex_array_state::*;
pub use vertex_attrib::*;
