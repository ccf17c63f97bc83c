// file: src/main.rs
// version: 1.0.0
// guid: d6e7f8a9-b0c1-2345-6789-012345defabc

//! Fleet Status Agent - Main entry point

use clap::Parser;
use fleet_status_agent::{
    cli::{args::Cli, commands::*},
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    match cli.command {
        fleet_status_agent::cli::args::Commands::Collect { config, output_dir } => {
            collect_command(config.as_deref(), &output_dir).await
        }
        fleet_status_agent::cli::args::Commands::ShowConfig { config } => {
            show_config_command(config.as_deref()).await
        }
    }
}
