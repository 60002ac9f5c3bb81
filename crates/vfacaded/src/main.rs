//! vfacaded - Vehicle Facade Daemon
//!
//! Simplified REST API in front of the upstream vehicle telemetry/command
//! service.
//!
//! Usage:
//!   vfacaded [OPTIONS] [config.toml]
//!
//! Options:
//!   --port <port>  Override the listen port from the config file
//!
//! If no config file is provided, defaults are used (port 5000, public
//! upstream service).

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vfacade_api::{create_router, AppState};
use vfacade_client::UpstreamClient;
use vfacade_proxy::VehicleFacade;

use crate::config::FacadeConfig;

/// Parsed command-line arguments
struct Args {
    /// Facade config file (TOML)
    config_path: Option<PathBuf>,
    /// Listen port override
    port: Option<u16>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut result = Args {
        config_path: None,
        port: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                let raw = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("Missing argument for --port"))?;
                let port = raw
                    .parse::<u16>()
                    .with_context(|| format!("Invalid --port value '{}'", raw))?;
                result.port = Some(port);
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(PathBuf::from(arg));
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    Ok(result)
}

fn print_help() {
    eprintln!(
        r#"vfacaded - Vehicle Facade Daemon

Usage: vfacaded [OPTIONS] [config.toml]

Options:
  -p, --port <port>  Override the listen port
  -h, --help         Print this help message

Examples:
  # Run with defaults (port 5000, public upstream)
  vfacaded

  # Run with config file
  vfacaded config/vfacade.toml
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vfacaded=info,vfacade_api=info,vfacade_proxy=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vfacaded (Vehicle Facade Daemon)");

    let args = parse_args(&std::env::args().skip(1).collect::<Vec<_>>())?;

    let mut config = match args.config_path {
        Some(ref path) => {
            tracing::info!("Loading config from: {}", path.display());
            FacadeConfig::load(path)?
        }
        None => {
            tracing::info!("No config file provided, using defaults");
            FacadeConfig::default()
        }
    };
    if let Some(port) = args.port {
        config.server.port = port;
        config.validate()?;
    }

    let tables = config.facade_tables()?;
    tracing::info!(
        vehicles = %tables.endpoints.resolve(vfacade_core::ResourceKind::Vehicles),
        denylist = tables.denylist.len(),
        "Upstream configured"
    );

    let client = UpstreamClient::with_config(config.timeout(), config.connect_timeout())
        .context("Failed to build upstream HTTP client")?;
    let facade = VehicleFacade::new(Arc::new(client), tables);
    let app = create_router(AppState::new(facade));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
