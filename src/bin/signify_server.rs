// ABOUTME: SignifyLearn API server binary
// ABOUTME: Loads configuration, connects the document store, seeds sample data, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! # SignifyLearn API Server Binary
//!
//! Starts the HTTP API. A document store that cannot be opened does not stop
//! the server; requests are then answered with degraded responses.

use anyhow::Result;
use clap::Parser;
use signify_learn::{config::ServerConfig, logging, resources::ServerResources, seed, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "signify-server")]
#[command(about = "SignifyLearn API - sign-language gestures, modules, quizzes and progress")]
struct Args {
    /// Override the bind port
    #[arg(long)]
    port: Option<u16>,

    /// Override the bind address
    #[arg(long)]
    host: Option<String>,

    /// Skip seeding empty collections at startup
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if args.no_seed {
        config.seed_on_startup = false;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::connect(config).await);

    if resources.config.seed_on_startup {
        match seed::seed_if_empty(&resources.store).await {
            Ok(report) => info!("Startup seeding: {report}"),
            Err(e) => error!(error.code = ?e.code, "Startup seeding failed: {}", e.message),
        }
    }

    server::serve(resources).await
}
