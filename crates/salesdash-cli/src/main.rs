//! SalesDash CLI
//!
//! Command-line interface for seeding and querying the sales store

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "salesdash")]
#[command(about = "SalesDash - transaction analytics store", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = ".salesdash/store.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
    /// Read-only queries printed as JSON
    Query(commands::query::QueryArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args, &cli.db),
        Commands::Query(args) => commands::query::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
