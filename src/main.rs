//! EdgeGuard gateway binary.
//!
//! Runs the guard middleware as a standalone HTTP server: configuration is
//! loaded from an optional TOML file, logging and metrics come up first,
//! then the gateway serves until Ctrl+C.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edgeguard::config::{self, GatewayConfig};
use edgeguard::http::GatewayServer;
use edgeguard::lifecycle::Shutdown;
use edgeguard::observability;

#[derive(Parser)]
#[command(name = "edgeguard")]
#[command(about = "Bot-blocking HTTP gateway", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        block_ai = config.guard.block_ai,
        whitelist_entries = config.guard.whitelist.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = GatewayServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
