// file: src/lib.rs
// version: 1.0.0
// guid: 0e6a2c48-3b97-4d51-80e6-a2c483b974d5

//! # uvinit
//!
//! A time-saving CLI to start a new Python project with uv. All substantive
//! work (template rendering, variable substitution, file generation,
//! dependency resolution) is delegated to copier and uv; this crate is a
//! thin orchestration and user-guidance layer over both.

pub mod cli;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod scaffold;
pub mod ui;
pub mod utils;

pub use error::{Result, UvinitError};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
