//! Flight board statistics service.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 FLIGHT STATS                  │
//!                      │                                               │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│ handlers │──▶│  upstream  │──┼──▶ open-data API
//!                      │  │ server  │   │          │   │  fetcher   │  │
//!                      │  └─────────┘   └────┬─────┘   └────────────┘  │
//!                      │                     │                         │
//!                      │                     ▼                         │
//!   Client Response    │  ┌─────────┐   ┌──────────┐                   │
//!   ◀──────────────────┼──│response │◀──│ flights  │                   │
//!                      │  │  JSON   │   │aggregate │                   │
//!                      │  └─────────┘   └──────────┘                   │
//!                      │                                               │
//!                      │  config · observability · lifecycle           │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use flight_stats::config::{load_config, ServiceConfig};
use flight_stats::lifecycle;
use flight_stats::observability::logging;

#[derive(Parser)]
#[command(name = "flight-stats")]
#[command(about = "Flight board statistics service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("flight-stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
