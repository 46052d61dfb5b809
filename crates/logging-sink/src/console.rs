//! crates/logging-sink/src/console.rs
//! Sinks bound to the process standard streams.

use std::io::{self, Write};

use crate::line_mode::LineMode;
use crate::sink::Sink;

/// Sink writing to the process standard output stream.
///
/// The default binding for informational records. The stream handle is locked
/// per emission so concurrent callers interleave whole lines rather than
/// fragments.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink {
    line_mode: LineMode,
}

impl StdoutSink {
    /// Creates a stdout sink that terminates each payload with a newline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_mode: LineMode::WithNewline,
        }
    }

    /// Creates a stdout sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(line_mode: LineMode) -> Self {
        Self { line_mode }
    }
}

impl Sink for StdoutSink {
    fn emit(&self, payload: &str) -> io::Result<()> {
        let mut handle = io::stdout().lock();
        handle.write_all(payload.as_bytes())?;
        if self.line_mode.append_newline() {
            handle.write_all(b"\n")?;
        }
        handle.flush()
    }
}

/// Sink writing to the process standard error stream.
///
/// The default binding for warning and error records.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink {
    line_mode: LineMode,
}

impl StderrSink {
    /// Creates a stderr sink that terminates each payload with a newline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_mode: LineMode::WithNewline,
        }
    }

    /// Creates a stderr sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(line_mode: LineMode) -> Self {
        Self { line_mode }
    }
}

impl Sink for StderrSink {
    fn emit(&self, payload: &str) -> io::Result<()> {
        let mut handle = io::stderr().lock();
        handle.write_all(payload.as_bytes())?;
        if self.line_mode.append_newline() {
            handle.write_all(b"\n")?;
        }
        handle.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_sinks_accept_payloads() {
        // The standard streams are shared test infrastructure; this only
        // exercises that emission succeeds.
        StdoutSink::new().emit("stdout probe").expect("stdout");
        StderrSink::new().emit("stderr probe").expect("stderr");
    }

    #[test]
    fn line_mode_is_configurable() {
        let sink = StdoutSink::with_line_mode(LineMode::WithoutNewline);
        assert!(!sink.line_mode.append_newline());
    }
}
