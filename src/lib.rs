// file: src/lib.rs
// version: 1.0.0
// guid: b4c5d6e7-f8a9-0123-4567-890123bcdefa

//! # Fleet Status Agent
//!
//! Agentless status collection for a fixed fleet of remote hosts. Opens one
//! SSH session per host, runs a set of diagnostic commands sequentially, and
//! writes the combined results as an indented JSON report and a CSV table.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use error::{AgentError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
