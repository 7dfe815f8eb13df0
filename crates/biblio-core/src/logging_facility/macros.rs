//! Operation logging macros
//!
//! Every catalogue operation (a session, one add/info transaction, a
//! `persist`, the migration run) is bracketed by a start event and exactly
//! one end event. All three macros expand through [`__log_op_event!`], so
//! `component`, `op` and `event` are always present and named as in
//! `biblio_core_types::schema`. Callers must depend on `biblio-core-types`.

/// Emit one operation event at `$level`
///
/// `$event` names an `EVENT_*` constant in `biblio_core_types::schema`.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $event:ident, $op:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = biblio_core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use biblio_core::log_op_start;
/// log_op_start!("session", session_id = "3f1c");
/// log_op_start!("persist", entity_kind = "Publisher", entity_key = "Ace Books");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, EVENT_START, $op $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use biblio_core::log_op_end;
/// log_op_end!("add_publisher", duration_ms = 12, outcome = "commit");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, EVENT_END, $op, duration_ms = $duration $(, $($field)*)?)
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind, `ERR_*` code and message become fields of the event.
///
/// ```
/// # use biblio_core::{log_op_error, errors::BiblioError};
/// let err = BiblioError::NoActiveTransaction;
/// log_op_error!("commit", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            EVENT_END_ERROR,
            $op,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message()
            $(, $($field)*)?
        );
    }};
}
