// file: src/collector/mod.rs
// version: 1.0.0
// guid: d2e3f4a5-b6c7-8901-2345-678901defabc

//! Per-host status collection over SSH

pub mod record;
pub mod session;

pub use record::{CommandOutcome, HostRecord};
pub use session::SshSession;

use crate::config::FleetConfig;
use tracing::{debug, error};

/// Collects one status record per host by running the configured
/// diagnostic commands over a single SSH session.
pub struct StatusCollector<'a> {
    config: &'a FleetConfig,
}

impl<'a> StatusCollector<'a> {
    /// Create a collector for one fleet configuration
    pub fn new(config: &'a FleetConfig) -> Self {
        Self { config }
    }

    /// Collect the status record for a single host.
    ///
    /// Always returns a record: a connection-level failure produces a record
    /// carrying only the host identity, timestamp, and an `error` field,
    /// while a failure of an individual command is recorded as a
    /// `command error: ...` value for that command alone. One connection
    /// attempt, one execution attempt per command, no retries.
    pub async fn collect_host(&self, host: &str) -> HostRecord {
        let mut record = HostRecord::new(host, &self.config.user);

        let session = match SshSession::connect(
            host,
            &self.config.user,
            &self.config.key_path,
            self.config.timeout(),
        )
        .await
        {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to connect to {}: {}", host, e);
                record.error = Some(e.to_string());
                return record;
            }
        };

        // Resolve the remote hostname before the diagnostic commands. A
        // failure here is treated like a connection failure: the session is
        // unusable and no command fields are attempted.
        match session.exec("hostname", false).await {
            Ok((stdout, _stderr)) => {
                debug!("Hostname output from {} = '{}'", host, stdout.trim());
                record.hostname = Some(record::normalize_hostname(&stdout));
            }
            Err(e) => {
                error!("Failed to resolve hostname on {}: {}", host, e);
                record.error = Some(e.to_string());
                return record;
            }
        }

        for (label, command) in &self.config.commands {
            let outcome = match session.exec(command, true).await {
                Ok((stdout, stderr)) => CommandOutcome::from_streams(&stdout, &stderr),
                Err(e) => CommandOutcome::Failed(e.to_string()),
            };
            record.metrics.insert(label.clone(), outcome.render());
        }

        // Session is dropped here; disconnect failures are swallowed.
        record
    }
}
