//! crates/logging-sink/src/capture.rs
//! In-memory sink for tests and embedders that inspect output.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use crate::sink::Sink;

/// Cloneable sink that records every payload in memory.
///
/// Clones share the same buffer, so a test can keep one handle, install the
/// other in the router, and observe everything that reached the sink.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureSink, Sink};
///
/// let capture = CaptureSink::new();
/// let installed = capture.clone();
///
/// installed.emit("first").unwrap();
/// installed.emit("second").unwrap();
///
/// assert_eq!(capture.records(), vec!["first", "second"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded payload, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains and returns the recorded payloads.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the number of recorded payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for CaptureSink {
    fn emit(&self, payload: &str) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let capture = CaptureSink::new();
        let alias = capture.clone();

        alias.emit("shared").expect("capture never fails");

        assert_eq!(capture.records(), vec!["shared"]);
        assert_eq!(capture.len(), 1);
        assert!(!capture.is_empty());
    }

    #[test]
    fn take_drains_the_buffer() {
        let capture = CaptureSink::new();
        capture.emit("one").expect("capture never fails");
        capture.emit("two").expect("capture never fails");

        assert_eq!(capture.take(), vec!["one", "two"]);
        assert!(capture.is_empty());
    }

    #[test]
    fn records_preserve_emission_order() {
        let capture = CaptureSink::new();
        for index in 0..100 {
            capture
                .emit(&format!("message {index}"))
                .expect("capture never fails");
        }

        let records = capture.records();
        assert_eq!(records.len(), 100);
        assert_eq!(records[0], "message 0");
        assert_eq!(records[99], "message 99");
    }
}
