// file: src/config/fleet.rs
// version: 1.0.0
// guid: b0c1d2e3-f4a5-6789-0123-456789bcdefa

//! Fleet configuration structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered mapping from a human-readable label to a shell command string.
/// The label is the field name the command's output is stored under.
pub type CommandSpec = IndexMap<String, String>;

/// Configuration for one collection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Host addresses to poll, in order
    pub hosts: Vec<String>,
    /// SSH username used for every host
    pub user: String,
    /// Path to the private key file (tilde and ${VAR} expansion supported)
    pub key_path: String,
    /// Connection and per-command timeout in seconds
    pub timeout_secs: u64,
    /// Diagnostic commands to run on each host
    pub commands: CommandSpec,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            hosts: vec!["3.148.186.129".to_string(), "3.145.103.142".to_string()],
            user: "ec2-user".to_string(),
            key_path: "~/.ssh/newkey.pem".to_string(),
            timeout_secs: 20,
            commands: default_commands(),
        }
    }
}

impl FleetConfig {
    /// Per-call timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.hosts.is_empty() {
            return Err(crate::error::AgentError::config(
                "Fleet configuration must list at least one host",
            ));
        }
        if self.user.is_empty() {
            return Err(crate::error::AgentError::config(
                "Fleet configuration must set a username",
            ));
        }
        if self.key_path.is_empty() {
            return Err(crate::error::AgentError::config(
                "Fleet configuration must set a private key path",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(crate::error::AgentError::config(
                "Timeout must be greater than zero seconds",
            ));
        }
        if self.commands.is_empty() {
            return Err(crate::error::AgentError::config(
                "Fleet configuration must define at least one command",
            ));
        }
        Ok(())
    }
}

/// Built-in diagnostic command set
fn default_commands() -> CommandSpec {
    let mut commands = CommandSpec::new();
    commands.insert("uptime".to_string(), "uptime -p".to_string());
    commands.insert(
        "cpu".to_string(),
        "top -bn1 | grep 'Cpu(s)' || mpstat 1 1 | tail -1".to_string(),
    );
    commands.insert(
        "disk".to_string(),
        "df -h / | grep -E '^/dev/' | head -1".to_string(),
    );
    commands.insert(
        "failed_logins".to_string(),
        r#"sudo bash -c 'grep "Invalid user" /var/log/secure | awk "{for(i=1;i<=NF;i++) if (\$i==\"from\") print \$(i+1)}" | sort | uniq -c | awk "{print \"Failed logins from IP: \"\$2\", count: \"\$1}"'"#
            .to_string(),
    );
    commands.insert(
        "network".to_string(),
        "ping -c 4 8.8.8.8 | tail -1".to_string(),
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_command_order() {
        let config = FleetConfig::default();
        let labels: Vec<&str> = config.commands.keys().map(String::as_str).collect();

        assert_eq!(
            labels,
            vec!["uptime", "cpu", "disk", "failed_logins", "network"]
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FleetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.user, "ec2-user");
    }

    #[test]
    fn test_validate_rejects_empty_hosts() {
        let config = FleetConfig {
            hosts: Vec::new(),
            ..FleetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = FleetConfig {
            timeout_secs: 0,
            ..FleetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_commands() {
        let config = FleetConfig {
            commands: CommandSpec::new(),
            ..FleetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
