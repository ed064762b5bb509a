mod config;
pub use config::*;

mod input;
pub use input::*;
