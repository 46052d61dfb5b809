#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` provides the sink primitives consumed by the debug
//! facility's router: the [`Sink`] contract, the generic [`WriterSink`], the
//! standard-stream bindings [`StdoutSink`] and [`StderrSink`], and the
//! in-memory [`CaptureSink`] used by tests and inspecting embedders.
//!
//! # Design
//!
//! A sink is a callable of one payload string. Keeping the contract that
//! narrow means the router can rebind destinations at runtime without the
//! rest of the facility knowing whether records end up on a console, in a
//! buffer, or in a test fixture. Writer-backed sinks own their newline policy
//! through [`LineMode`], mirroring line-oriented console output by default.
//!
//! # Errors
//!
//! [`Sink::emit`] surfaces [`std::io::Error`] values from the underlying
//! destination. The router above this crate swallows them; a failing sink
//! must never take down the caller that logged.
//!
//! # Examples
//!
//! Collect diagnostics into a buffer and inspect them:
//!
//! ```
//! use logging_sink::{CaptureSink, Sink};
//!
//! let capture = CaptureSink::new();
//! capture.emit("hello 42").unwrap();
//! assert_eq!(capture.records(), vec!["hello 42"]);
//! ```

mod capture;
mod console;
mod line_mode;
mod sink;

pub use capture::CaptureSink;
pub use console::{StderrSink, StdoutSink};
pub use line_mode::LineMode;
pub use sink::{Sink, WriterSink};
