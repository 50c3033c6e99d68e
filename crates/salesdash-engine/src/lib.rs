//! SalesDash Engine - Orchestration layer
//!
//! Turns validated requests into store queries and analytics, and applies
//! the reseed command, logging each operation at its boundary.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use commands::read_tools::{CombinedData, TransactionPage};
