// file: src/scaffold/mod.rs
// version: 1.0.0
// guid: a6d0f2b4-8e53-4c17-92a6-5f1e8c3b0d79

//! Project scaffolding: copier invocation, answers parsing, git setup

pub mod answers;
pub mod copier;
pub mod git;
pub mod github;

pub use copier::{CopyRequest, DEFAULT_TEMPLATE};
