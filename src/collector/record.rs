// file: src/collector/record.rs
// version: 1.0.0
// guid: e3f4a5b6-c7d8-9012-3456-789012efabcd

//! Per-host result record and command outcome classification

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat result record for one host.
///
/// Serialized as a single JSON object with its fields in population order:
/// host identity and timestamp first, then the resolved hostname and one
/// field per diagnostic command on success, or a single `error` field when
/// the connection itself failed. Records are never mutated after collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    pub host: String,
    pub user: String,
    pub collected_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(flatten)]
    pub metrics: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HostRecord {
    /// Create a fresh record stamped with the current UTC time
    pub fn new(host: &str, user: &str) -> Self {
        Self {
            host: host.to_string(),
            user: user.to_string(),
            collected_at: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            hostname: None,
            metrics: IndexMap::new(),
            error: None,
        }
    }
}

/// Trim the remote `hostname` output, falling back to `"Unknown"` when the
/// command produced nothing.
pub fn normalize_hostname(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Classified result of one diagnostic command.
///
/// Distinguishes real output, the stderr fallback, silence, and an execution
/// failure, but renders all of them back to the flat string representation
/// stored in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Non-empty standard output
    Output(String),
    /// Standard output was empty, standard error was not
    StderrFallback(String),
    /// Both streams empty
    Empty,
    /// The execution itself failed
    Failed(String),
}

impl CommandOutcome {
    /// Classify the trimmed stdout/stderr pair of a completed command
    pub fn from_streams(stdout: &str, stderr: &str) -> Self {
        let stdout = stdout.trim();
        let stderr = stderr.trim();
        if !stdout.is_empty() {
            Self::Output(stdout.to_string())
        } else if !stderr.is_empty() {
            Self::StderrFallback(stderr.to_string())
        } else {
            Self::Empty
        }
    }

    /// Render the outcome as the flat string stored under the command label
    pub fn render(&self) -> String {
        match self {
            Self::Output(text) | Self::StderrFallback(text) => text.clone(),
            Self::Empty => String::new(),
            Self::Failed(description) => format!("command error: {}", description),
        }
    }
}
