// file: src/utils/mod.rs
// version: 1.0.0
// guid: b1e5c7a9-2d48-4f03-a6b1-8c5e2f9d0a34

//! Utility functions for uvinit

pub mod system;

pub use system::SystemUtils;
