#[path = "impl.rs"]
mod config_impl;
mod structs;

pub use structs::*;
