//! Seed commands
//!
//! Usage:
//!   salesdash seed import <PATH>
//!   salesdash seed fetch [--url URL] [--timeout-secs N]

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

use salesdash_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use salesdash_store::seed::{fetch_feed, DEFAULT_FEED_URL, DEFAULT_FETCH_TIMEOUT};
use salesdash_store::SqliteStore;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Replace the store with a local JSON feed file
    Import(ImportArgs),
    /// Download the feed and replace the store with it
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a JSON array of sale records
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Feed URL
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Give up after this many seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

/// Execute seed command
pub fn execute(args: SeedArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, db),
        SeedCommand::Fetch(fetch_args) => execute_fetch(fetch_args, db),
    }
}

fn execute_import(args: ImportArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(db)?;

    println!("Importing {}...", args.path.display());
    let EngineCommandResult::Replaced { records } =
        apply_engine_command(EngineCommand::ImportFile { path: args.path }, &store)?;
    println!("✓ Imported {} records", records);

    Ok(())
}

fn execute_fetch(args: FetchArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Open first so a bad --db fails before the download
    let store = SqliteStore::open(db)?;

    println!("Fetching {}...", args.url);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let records = runtime.block_on(fetch_feed(&args.url, Duration::from_secs(args.timeout_secs)))?;

    let EngineCommandResult::Replaced { records } = apply_engine_command(
        EngineCommand::ReplaceRecords {
            records,
            source: args.url,
        },
        &store,
    )?;
    println!("✓ Imported {} records", records);

    Ok(())
}
