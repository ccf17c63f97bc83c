// file: src/cli/commands.rs
// version: 1.0.0
// guid: d8e9f0a1-b2c3-4567-8901-234567defabc

//! Command implementations for the CLI

use crate::{
    collector::StatusCollector,
    config::{ConfigLoader, FleetConfig},
    report::Reporter,
    Result,
};
use tracing::{error, info};

/// Poll every configured host in order and write the combined reports.
///
/// Each host is visited exactly once, sequentially; a host that fails to
/// connect still contributes one record to the report bundle. The bundle is
/// handed to the reporter only after the last host has completed.
pub async fn collect_command(config_path: Option<&str>, output_dir: &str) -> Result<()> {
    let config = load_or_default(config_path)?;

    info!("Starting status collection for {} hosts", config.hosts.len());

    let collector = StatusCollector::new(&config);
    let mut records = Vec::with_capacity(config.hosts.len());

    for host in &config.hosts {
        info!("Collecting from {} (user={})", host, config.user);
        let record = collector.collect_host(host).await;
        if let Some(err) = &record.error {
            error!("Collection from {} failed: {}", host, err);
        }
        records.push(record);
    }

    let reporter = Reporter::with_output_dir(output_dir);
    reporter.write_reports(&records)?;

    Ok(())
}

/// Print the effective fleet configuration as YAML
pub async fn show_config_command(config_path: Option<&str>) -> Result<()> {
    let config = load_or_default(config_path)?;
    let yaml = serde_yaml::to_string(&config)?;
    println!("{}", yaml);
    Ok(())
}

fn load_or_default(config_path: Option<&str>) -> Result<FleetConfig> {
    match config_path {
        Some(path) => ConfigLoader::new().load_fleet_config(path),
        None => Ok(FleetConfig::default()),
    }
}
