// ABOUTME: Server binary for the ACEest Fitness API
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! # ACEest Fitness API Server Binary
//!
//! Starts the workout tracking HTTP service with environment-based
//! configuration and structured logging.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use aceest_fitness::{config::ServerConfig, context::ServerResources, logging, routes};

#[derive(Parser)]
#[command(name = "aceest-fitness-server")]
#[command(about = "ACEest Fitness API - validated workout tracking over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("starting ACEest Fitness API");
    info!("{}", config.summary());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(config));
    let app = routes::router(resources).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port))
        .await
        .with_context(|| format!("failed to bind port {http_port}"))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
