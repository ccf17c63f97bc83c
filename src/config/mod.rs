// file: src/config/mod.rs
// version: 1.0.0
// guid: a9b0c1d2-e3f4-5678-9012-345678abcdef

//! Configuration module for the fleet status agent
//!
//! Handles the built-in fleet defaults and loading of fleet configuration
//! files with environment variable substitution.

pub mod fleet;
pub mod loader;

pub use fleet::{CommandSpec, FleetConfig};
pub use loader::ConfigLoader;
