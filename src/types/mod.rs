//! Element-type tags for numeric containers.

mod code;
mod dtype;

pub use code::DtypeCode;
pub use dtype::Dtype;
