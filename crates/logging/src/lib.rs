#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the policy and dispatch layer of the debug-message facility:
//! the process-wide verbosity threshold, the severity-keyed sink table, the
//! host-configuration hook, and the public entry points. The value model and
//! safe formatter live in the `message` crate; sink primitives live in
//! `logging-sink`.
//!
//! # Design
//!
//! A call flows entry point → level gate → safe formatter → record → sink
//! router, synchronously and on the calling thread. The gate runs before any
//! formatting so silenced calls cost a timestamp and an atomic load. The
//! threshold and sink table are process-wide mutable configuration with
//! last-writer-wins semantics; they are never part of a data plane.
//!
//! # Invariants
//!
//! - The entry points are total over all input values: no panic, no error,
//!   no blocking, whatever the host passes in.
//! - Sink I/O failures and sink panics are absorbed by the router.
//! - Within one thread, records reach the sink in call order.
//!
//! # Errors
//!
//! Nothing escapes the facility. Formatting faults collapse into sentinel
//! markers; sink failures are swallowed; host-configuration lookups that
//! fail to coerce are ignored.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::CaptureSink;
//!
//! let capture = CaptureSink::new();
//! logging::set_all_sinks(Arc::new(capture.clone()));
//! logging::set_level(0);
//!
//! logging::log!("hello", 42);
//! logging::warn!("disk 90%");
//!
//! assert_eq!(capture.records(), vec!["hello 42", "disk 90%"]);
//! ```

mod api;
mod format;
mod host;
mod macros;
mod router;
mod threshold;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use api::{dispatch, error, log, report, warn};
pub use format::{record_format, set_record_format};
pub use host::{DEBUG_ENABLED_VAR, DEBUG_LEVEL_VAR, EnvConfig, HostConfig, init, init_with};
pub use router::{SinkTable, emit, reset_sinks, set_all_sinks, set_sink};
pub use threshold::{SILENCE_ALL, level, set_level, set_level_from_str, should_emit};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{DebugLayer, init_tracing, init_tracing_with_filter};

pub use logging_sink::{CaptureSink, LineMode, Sink, StderrSink, StdoutSink, WriterSink};
pub use message::{
    FieldFault, FieldTable, Record, RecordFormat, Reflect, RenderLimits, Severity, Value, render,
    render_args,
};

/// Serialises tests that mutate the process-wide threshold, sink table, or
/// record format.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
