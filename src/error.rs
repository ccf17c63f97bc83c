// file: src/error.rs
// version: 1.0.0
// guid: c5d6e7f8-a9b0-1234-5678-901234cdefab

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for the fleet status agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("SSH error: {0}")]
    Ssh(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AgentError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new SSH error
    pub fn ssh(msg: impl Into<String>) -> Self {
        Self::Ssh(msg.into())
    }

    /// Create a new report error
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }
}
