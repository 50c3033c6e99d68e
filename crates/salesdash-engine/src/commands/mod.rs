//! Command orchestration layer.
//!
//! Provides the read-only query surface and the reseed command, both
//! operating on any `RecordStore`.

pub mod engine_command;
pub mod engine_query;
pub mod read_tools;
