mod config;
pub use config::*;

mod error;
pub use error::*;

mod handle;
pub use handle::*;
