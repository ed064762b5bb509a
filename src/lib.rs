#![allow(clippy::module_inception)]

pub mod constants;
pub mod models;
pub mod player;
pub mod runtime;
pub mod types;
