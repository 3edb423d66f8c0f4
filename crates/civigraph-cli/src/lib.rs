//! Command-line driver for the Civigraph pipeline.

pub mod commands;
pub mod render;

pub use commands::{execute, Cli, Command};
