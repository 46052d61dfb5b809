//! crates/logging-sink/src/sink.rs
//! The sink contract and the generic writer-backed sink.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::line_mode::LineMode;

/// Destination for formatted record lines.
///
/// A sink accepts one payload string per emitted record. Implementations are
/// shared across threads by the router, hence the `Send + Sync` bound.
/// Returning an error is permitted; the router swallows it, because the
/// logging facility must never bring down its caller.
pub trait Sink: Send + Sync {
    /// Delivers one payload.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying destination. Callers
    /// routing records are expected to absorb it.
    fn emit(&self, payload: &str) -> io::Result<()>;
}

/// Sink that streams payloads into an arbitrary [`Write`] implementor.
///
/// The writer sits behind a mutex so the sink can be shared by the
/// process-wide router; a poisoned lock is recovered rather than propagated,
/// keeping emission total. Each payload is written according to the
/// configured [`LineMode`] and flushed.
///
/// # Examples
///
/// ```
/// use logging_sink::{Sink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.emit("first").unwrap();
/// sink.emit("second").unwrap();
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "first\nsecond\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each payload.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        self.writer.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn emit(&self, payload: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(payload.as_bytes())?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}
