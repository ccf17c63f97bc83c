// file: src/cli/mod.rs
// version: 1.0.0
// guid: b6c7d8e9-f0a1-2345-6789-012345bcdefa

//! Command line interface module

pub mod args;
pub mod commands;
