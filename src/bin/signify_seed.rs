// ABOUTME: Sample data seeding utility for the SignifyLearn API
// ABOUTME: Fills empty gesture, module, and quiz collections, then prints what was inserted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Sample data seeder.
//!
//! Usage:
//! ```bash
//! # Seed the store named by DATABASE_URL
//! cargo run --bin signify-seed
//!
//! # Override database URL
//! cargo run --bin signify-seed -- --database-url sqlite:./data/signify.db
//!
//! # Verbose output
//! cargo run --bin signify-seed -- -v
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use signify_learn::{
    config::ServerConfig,
    database::{Collection, Database, Store},
    logging::{LogFormat, LoggingConfig},
    seed,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "signify-seed",
    about = "SignifyLearn sample data seeder",
    long_about = "Insert the sample gestures, modules, and quiz questions into empty collections"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .init()?;

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);

    info!("Seeding {database_url}");
    let database = Database::new(&database_url)
        .await
        .with_context(|| format!("Failed to open {database_url}"))?;
    let store = Store::connected(database);

    let report = seed::seed_if_empty(&store).await?;
    if report.skipped {
        bail!("Seeding skipped: the document store became unavailable");
    }
    println!("{report}");

    let database = store.database()?;
    for collection in [Collection::Gesture, Collection::Module, Collection::QuizQuestion] {
        println!(
            "  {collection}: {} documents",
            database.count_documents(collection).await?
        );
    }

    Ok(())
}
