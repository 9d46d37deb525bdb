// file: src/cli/mod.rs
// version: 1.0.0
// guid: 2d8f4a60-1c75-4b39-92d8-f4a601c754b3

//! Command line interface for uvinit

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
