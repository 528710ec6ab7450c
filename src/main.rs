//! Employee REST facade (v1)
//!
//! A REST facade over the upstream employee service, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │               EMPLOYEE FACADE                 │
//!                  │                                               │
//!   Client ───────▶│  http (router + handlers)                     │
//!                  │        │                                      │
//!                  │        ▼                                      │
//!                  │  gateway (retry-wrapped upstream client,      │──▶ Upstream
//!                  │           filter / max / sort + truncate)     │    employee
//!                  │        │                                      │    service
//!   Client ◀───────│        ▼                                      │
//!                  │  response (200 JSON / error taxonomy)         │
//!                  │                                               │
//!                  │  Cross-cutting: config, resilience (retry),   │
//!                  │  observability (tracing), lifecycle           │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use employee_api::config::{load_config, AppConfig};
use employee_api::http::HttpServer;
use employee_api::lifecycle::Shutdown;
use employee_api::observability::logging;

#[derive(Parser)]
#[command(name = "employee-api")]
#[command(about = "REST facade over the upstream employee service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("employee-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        retry_max_attempts = config.retries.max_attempts,
        retry_delay_ms = config.retries.delay_ms,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
