//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the debug facility.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into the facility's severity pipeline, so code instrumented with
//! the standard macros (error!, warn!, info!, debug!, trace!) reaches the
//! same threshold gate and sink table as direct calls.
//!
//! # Architecture
//!
//! - [`DebugLayer`]: a tracing-subscriber layer that captures events
//! - Event levels map onto severities: ERROR → error, WARN → warn, and
//!   INFO/DEBUG/TRACE → informational
//! - The facility's own gate decides whether the record reaches a sink
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//!
//! tracing::warn!("disk 90%");
//! tracing::info!("transfer complete");
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use message::{Severity, Value};

/// A tracing layer that forwards events into the debug facility.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebugLayer;

impl DebugLayer {
    /// Creates a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn level_to_severity(level: Level) -> Severity {
        if level == Level::ERROR {
            Severity::Error
        } else if level == Level::WARN {
            Severity::Warn
        } else {
            Severity::Info
        }
    }
}

impl<S> Layer<S> for DebugLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::level_to_severity(*event.metadata().level());
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(text) = visitor.message {
            crate::api::dispatch(severity, &[Value::from(text)]);
        }
    }
}

/// Visitor extracting the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that routes events into the facility.
///
/// # Example
///
/// ```rust,ignore
/// logging::init_tracing();
/// tracing::error!("request failed");
/// ```
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(DebugLayer::new()).init();
}

/// Installs the bridge together with an additional filter layer.
///
/// Allows combining the facility's severity gate with standard tracing
/// filters for finer-grained control.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(DebugLayer::new())
        .init();
}
