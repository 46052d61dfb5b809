//! crates/logging/src/router.rs
//! Severity-keyed sink table and record dispatch.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use logging_sink::{Sink, StderrSink, StdoutSink};
use message::Severity;

/// Mapping from [`Severity`] to the sink that receives its records.
///
/// The process-wide instance lives behind this module's rebinding operations;
/// the type itself is plain data so embedders and tests can assemble tables
/// directly.
#[derive(Clone)]
pub struct SinkTable {
    info: Arc<dyn Sink>,
    warn: Arc<dyn Sink>,
    error: Arc<dyn Sink>,
}

impl SinkTable {
    /// Builds the default table: informational records to standard output,
    /// warnings and errors to standard error.
    #[must_use]
    pub fn console() -> Self {
        Self {
            info: Arc::new(StdoutSink::new()),
            warn: Arc::new(StderrSink::new()),
            error: Arc::new(StderrSink::new()),
        }
    }

    /// Builds a table routing every severity to one sink.
    ///
    /// This is the fallback shape for hosts that provide a single output
    /// stream.
    #[must_use]
    pub fn uniform(sink: Arc<dyn Sink>) -> Self {
        Self {
            info: Arc::clone(&sink),
            warn: Arc::clone(&sink),
            error: sink,
        }
    }

    /// Returns the sink bound to `severity`.
    #[must_use]
    pub fn sink(&self, severity: Severity) -> &Arc<dyn Sink> {
        match severity {
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
        }
    }

    /// Rebinds the sink for `severity`.
    pub fn bind(&mut self, severity: Severity, sink: Arc<dyn Sink>) {
        match severity {
            Severity::Info => self.info = sink,
            Severity::Warn => self.warn = sink,
            Severity::Error => self.error = sink,
        }
    }
}

impl Default for SinkTable {
    fn default() -> Self {
        Self::console()
    }
}

fn table() -> &'static RwLock<SinkTable> {
    static TABLE: OnceLock<RwLock<SinkTable>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(SinkTable::console()))
}

/// Rebinds the process-wide sink for one severity.
pub fn set_sink(severity: Severity, sink: Arc<dyn Sink>) {
    table()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .bind(severity, sink);
}

/// Routes every severity to one process-wide sink.
pub fn set_all_sinks(sink: Arc<dyn Sink>) {
    *table().write().unwrap_or_else(PoisonError::into_inner) = SinkTable::uniform(sink);
}

/// Restores the default console bindings.
pub fn reset_sinks() {
    *table().write().unwrap_or_else(PoisonError::into_inner) = SinkTable::console();
}

/// Delivers one payload to the sink bound to `severity`.
///
/// Sink I/O errors and sink panics are swallowed here: a failing destination
/// must never take down the caller that logged. The table lock is released
/// before the sink runs so a misbehaving sink cannot poison it.
pub fn emit(severity: Severity, payload: &str) {
    let sink = {
        let guard = table().read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(guard.sink(severity))
    };
    let _ = catch_unwind(AssertUnwindSafe(|| sink.emit(payload)));
}
