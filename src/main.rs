//! ProductMind dashboard
//!
//! Single-process web dashboard with mock AI agents, an in-memory task list,
//! and simulated Jira tickets. The same agent tools are also reachable over
//! MCP on stdio.

use anyhow::Result;
use clap::Parser;
use productmind::app::ProductMind;
use productmind::cli::{Cli, Command};
use productmind::config::{Config, ConfigLoader};
use productmind::dashboard;
use productmind::logging::{self, LogTarget};
use productmind::mcp;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let target = LogTarget::parse(&cli.log);
    let target = match cli.command {
        Some(Command::Mcp) => target.without_stdout(),
        _ => target,
    };
    logging::init(&target, cli.verbose)?;

    let mut loader = ConfigLoader::load(cli.config.as_deref().map(Path::new))?;
    info!(
        tier = %loader.tier(),
        path = ?loader.path(),
        "Configuration loaded"
    );
    apply_cli_overrides(loader.config_mut(), &cli);
    let config = loader.into_config();

    match cli.command {
        Some(Command::Config) => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        Some(Command::Mcp) => {
            let app = Arc::new(ProductMind::new(&config));
            mcp::serve_stdio(app).await?;
        }
        Some(Command::Serve) | None => {
            run_dashboard(config).await?;
        }
    }

    Ok(())
}

/// CLI flags win over config files and environment variables.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.generation.delay_ms = delay_ms;
    }
    if let Some(seed) = cli.seed {
        config.generation.seed = Some(seed);
    }
}

/// Run the web dashboard until Ctrl-C.
async fn run_dashboard(config: Config) -> Result<()> {
    info!("Initializing ProductMind AI Dashboard");
    let app = Arc::new(ProductMind::new(&config));
    info!(
        tools = ?app.registry().tool_names(),
        agents = app.agents().len(),
        delay_ms = config.generation.delay_ms,
        seeded = config.generation.seed.is_some(),
        "Agents loaded"
    );

    let (shutdown_tx, addr, server) = dashboard::start_server(app, &config.server).await?;
    info!("Dashboard ready at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");
    let _ = shutdown_tx.send(());
    server.await?;
    Ok(())
}
