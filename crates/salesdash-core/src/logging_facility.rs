//! Structured logging
//!
//! `init` installs the global subscriber once per process, picking the
//! output format from a [`Profile`]. Operations report themselves through
//! `log_op_start!`, `log_op_end!` and `log_op_error!` so every lifecycle
//! event carries the same `component`, `op` and `event` fields. Tests
//! install [`init_test_capture`] instead and assert on what was recorded.
//!
//! ```rust
//! use salesdash_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
