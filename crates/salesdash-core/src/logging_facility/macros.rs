//! Operation logging macros
//!
//! Every operation emits `start`, then either `end` or `end_error`, each
//! tagged with `component` (the calling module) and `op`. Extra
//! `key = value` fields may follow. Callers need `tracing` in their own
//! dependencies.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// ```
/// # use salesdash_core::log_op_start;
/// log_op_start!("transactions");
/// log_op_start!("transactions", month = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::core_types::schema::EVENT_START
            $(, $($field)*)?
        );
    };
}

/// ```
/// # use salesdash_core::log_op_end;
/// log_op_end!("transactions", duration_ms = 42);
/// log_op_end!("seed_import", duration_ms = 7, record_count = 1000);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        );
    };
}

/// Log a failed operation with its error kind and code
///
/// The error may be anything convertible into `ExError`.
///
/// ```
/// # use salesdash_core::{log_op_error, errors::DashError};
/// log_op_error!("statistics", DashError::MonthMissing, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message()
            $(, $($field)*)?
        );
    }};
}
