// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Populate the database with seed data.
//!
//! Deletes ALL users, teams, activities, leaderboard entries and workouts
//! before inserting fresh data. Intended for development environments.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use octofit_tracker::{
    config::Config,
    db::{EntityStore, FirestoreDb, MemoryStore},
    services::{populate, PopulateOptions, PopulateSummary},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    Firestore,
    Memory,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Confirm that every existing record will be deleted
    #[arg(long)]
    confirm_wipe: bool,

    /// RNG seed for reproducible activity data
    #[arg(long, env = "POPULATE_SEED")]
    seed: Option<u64>,

    /// Entity store to populate
    #[arg(long, value_enum, default_value = "firestore")]
    backend: Backend,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&args.log_level)
                .context("Invalid --log-level")?,
        )
        .with_target(false)
        .init();

    if !args.confirm_wipe {
        bail!("Refusing to run: this deletes all data. Pass --confirm-wipe to proceed.");
    }

    let options = PopulateOptions {
        confirm_wipe: args.confirm_wipe,
        seed: args.seed,
    };

    let summary = match args.backend {
        Backend::Firestore => {
            let config = Config::from_env()?;
            let db = FirestoreDb::new(&config.gcp_project_id).await?;
            run(&db, options).await?
        }
        Backend::Memory => run(&MemoryStore::new(), options).await?,
    };

    tracing::info!(
        "Re-run with --seed {} to reproduce this data set",
        summary.seed
    );
    Ok(())
}

async fn run<S: EntityStore>(store: &S, options: PopulateOptions) -> anyhow::Result<PopulateSummary> {
    populate(store, options)
        .await
        .context("Database population failed")
}
