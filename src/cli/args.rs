// file: src/cli/args.rs
// version: 1.0.0
// guid: c7d8e9f0-a1b2-3456-7890-123456cdefab

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fleet-status-agent")]
#[command(about = "Agentless SSH status collection with JSON and CSV reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every configured host and write the combined reports
    Collect {
        #[arg(short, long, help = "Fleet configuration file (built-in defaults otherwise)")]
        config: Option<String>,

        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },

    /// Print the effective fleet configuration as YAML
    ShowConfig {
        #[arg(short, long)]
        config: Option<String>,
    },
}
