// file: src/config/loader.rs
// version: 1.0.0
// guid: c1d2e3f4-a5b6-7890-1234-567890cdefab

//! Configuration file loading and environment variable substitution

use super::FleetConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load fleet configuration from a YAML file
    pub fn load_fleet_config<P: AsRef<Path>>(&self, path: P) -> Result<FleetConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::AgentError::Config(format!(
                "Failed to read fleet config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: FleetConfig = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        Ok(config)
    }

    /// Expand `${VAR}` references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::AgentError::Config(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            match self.env_vars.get(var_name) {
                Some(value) => {
                    result = result.replace(&cap[0], value);
                }
                None => missing_vars.push(var_name.to_string()),
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::AgentError::Config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_with(vars: &[(&str, &str)]) -> ConfigLoader {
        ConfigLoader {
            env_vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_expand_env_vars() {
        let loader = loader_with(&[("FLEET_USER", "admin")]);
        let expanded = loader.expand_env_vars("user: ${FLEET_USER}").unwrap();
        assert_eq!(expanded, "user: admin");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let loader = loader_with(&[]);
        let err = loader
            .expand_env_vars("key_path: ${NO_SUCH_KEY_VAR}")
            .unwrap_err();
        assert!(err.to_string().contains("NO_SUCH_KEY_VAR"));
    }

    #[test]
    fn test_expand_env_vars_multiple_occurrences() {
        let loader = loader_with(&[("H", "web-1")]);
        let expanded = loader.expand_env_vars("hosts:\n  - ${H}\n  - ${H}").unwrap();
        assert_eq!(expanded, "hosts:\n  - web-1\n  - web-1");
    }
}
