//! Query commands
//!
//! Usage:
//!   salesdash query transactions --month M [--search S] [--page P] [--per-page N]
//!   salesdash query statistics|bar-chart|pie-chart --month M
//!
//! Parameters go through the same validation as the HTTP surface, so they
//! are taken as raw text.

use clap::{Args, Subcommand};
use std::path::Path;

use salesdash_core::{ListingParams, ListingRequest, Month, MonthParams};
use salesdash_engine::{apply_engine_query, EngineQuery};
use salesdash_store::SqliteStore;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Paginated transactions for a month
    Transactions(TransactionsArgs),
    /// Sale totals for a month
    Statistics(MonthArgs),
    /// Price-range histogram for a month
    BarChart(MonthArgs),
    /// Category breakdown for a month
    PieChart(MonthArgs),
}

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month number, 1-12
    #[arg(long)]
    pub month: String,
}

#[derive(Debug, Args)]
pub struct TransactionsArgs {
    /// Month number, 1-12
    #[arg(long)]
    pub month: String,

    /// Matches title or description text, or an exact price
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub page: Option<String>,

    #[arg(long)]
    pub per_page: Option<String>,
}

fn month_query(
    args: MonthArgs,
    build: fn(Month) -> EngineQuery,
) -> Result<EngineQuery, Box<dyn std::error::Error>> {
    let month = MonthParams {
        month: Some(args.month),
    }
    .month()?;
    Ok(build(month))
}

/// Execute query command
pub fn execute(args: QueryArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before touching the database
    let query = match args.command {
        QueryCommand::Transactions(t) => {
            let params = ListingParams {
                month: Some(t.month),
                search: t.search,
                page: t.page,
                per_page: t.per_page,
            };
            EngineQuery::Transactions(ListingRequest::from_params(&params)?)
        }
        QueryCommand::Statistics(m) => month_query(m, |month| EngineQuery::Statistics { month })?,
        QueryCommand::BarChart(m) => month_query(m, |month| EngineQuery::BarChart { month })?,
        QueryCommand::PieChart(m) => month_query(m, |month| EngineQuery::PieChart { month })?,
    };

    let store = SqliteStore::open(db)?;
    let result = apply_engine_query(query, &store)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
