// src/lib.rs
pub mod args;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod stats;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
