// file: src/migrate/mod.rs
// version: 1.0.0
// guid: 1b7d5f39-2c80-4e64-a1b7-d5f392c804e6

//! Migration analysis for existing Python projects

pub mod analysis;
pub mod recommendations;

pub use analysis::{analyze_project, BuildSystem, ProjectAnalysis};
