// ABOUTME: HTTP server binary exposing status, health, and prediction endpoints
// ABOUTME: Loads model artifacts once at startup and serves until Ctrl+C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

//! # Stunting Predictor Server Binary
//!
//! Reads configuration from the environment, loads the model context once,
//! and serves the prediction API. A failed artifact load does not stop the
//! server: `/` reports the failure and `/predict` answers 503.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use stunting_predictor::{
    config::{LogLevel, ModelPaths, ServerConfig},
    logging::LoggingConfig,
    resources::PredictionResources,
    routes,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "stunting-server")]
#[command(about = "Child stunting prediction API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override model artifact directory
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Override log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(level) = args.log_level.as_deref() {
        config.log_level = LogLevel::from_str_or_default(level);
    }
    LoggingConfig::from_env()
        .with_level(config.log_level)
        .init()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(model_dir) = args.model_dir {
        config.model = ModelPaths::from_dir(model_dir);
    }
    config.validate()?;

    info!("Starting stunting prediction API");
    info!("{}", config.summary());

    let resources = Arc::new(PredictionResources::load(&config.model));
    if !resources.is_ready() {
        warn!(
            status = ?resources.status(),
            "Model context not ready; predictions will be refused"
        );
    }

    let app = routes::router(resources, &config.cors);
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "HTTP server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
