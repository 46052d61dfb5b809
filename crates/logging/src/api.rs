//! crates/logging/src/api.rs
//! Public entry points.

use chrono::Utc;

use message::{Record, Severity, Value, render_args};

use crate::{format, host, router, threshold};

/// Emits an informational record built from `args`.
///
/// Arguments are formatted independently and joined with a single space.
/// Calls gated off by the threshold return before any formatting happens.
///
/// # Examples
///
/// ```
/// use logging::Value;
///
/// logging::log(&[Value::from("hello"), Value::from(42)]);
/// ```
pub fn log(args: &[Value]) {
    dispatch(Severity::Info, args);
}

/// Emits a warning record built from `args`.
pub fn warn(args: &[Value]) {
    dispatch(Severity::Warn, args);
}

/// Emits an error record built from `args`.
pub fn error(args: &[Value]) {
    dispatch(Severity::Error, args);
}

/// Emits an error record for `error`, including its source chain.
///
/// The payload starts with the error's message; when the error carries
/// sources, each appears on its own `caused by:` line below it.
pub fn report(error: &dyn std::error::Error) {
    dispatch(Severity::Error, &[Value::from_error(error)]);
}

/// Emits a record of explicit `severity` built from `args`.
///
/// The severity-specific entry points forward here; the bridge layers use it
/// directly when the severity is only known at runtime.
pub fn dispatch(severity: Severity, args: &[Value]) {
    // Capture the instant before formatting so slow rendering cannot skew it.
    let timestamp = Utc::now();
    host::ensure_init();
    if !threshold::should_emit(severity) {
        return;
    }
    let record = Record::new(severity, timestamp, render_args(args));
    router::emit(severity, &record.to_line(format::record_format()));
}
