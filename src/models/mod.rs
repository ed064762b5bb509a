pub mod common;
pub mod surface;
