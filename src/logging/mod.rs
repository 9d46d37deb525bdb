// file: src/logging/mod.rs
// version: 1.0.0
// guid: 7c2e9f04-1a5b-4d38-9e6c-0b4f8a2d5e17

//! Logging system for uvinit

pub mod logger;

pub use logger::init_logger;
