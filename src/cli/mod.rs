//! CLI command definitions for productmind
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use clap::{Parser, Subcommand};

/// ProductMind dashboard: mock AI agents, tasks and simulated Jira tickets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    /// Address for the web dashboard (overrides config)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port for the web dashboard (overrides config)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Simulated agent latency in milliseconds (overrides config)
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible agent output (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the web dashboard (default if no subcommand given)
    Serve,

    /// Serve the agent tools over MCP on stdio
    Mcp,

    /// Print the effective configuration as YAML
    Config,
}
