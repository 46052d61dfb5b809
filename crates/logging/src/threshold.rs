//! crates/logging/src/threshold.rs
//! Process-wide verbosity threshold and the level gate.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use message::Severity;

/// Threshold value one above the highest severity rank; silences all output.
pub const SILENCE_ALL: i64 = Severity::Error.rank() as i64 + 1;

// Relaxed ordering throughout: the threshold is configuration, not a data
// plane, and last-writer-wins across concurrent callers is the contract.
static THRESHOLD: AtomicI64 = AtomicI64::new(0);
static EXPLICIT: AtomicBool = AtomicBool::new(false);

/// Sets the process-wide threshold.
///
/// Negative inputs clamp to zero. A threshold of zero emits every severity;
/// [`SILENCE_ALL`] or above emits none. Explicit configuration wins over the
/// ambient host configuration read at first use.
///
/// # Examples
///
/// ```
/// logging::set_level(0);
/// assert_eq!(logging::level(), 0);
///
/// logging::set_level(-5);
/// assert_eq!(logging::level(), 0);
/// ```
pub fn set_level(level: i64) {
    EXPLICIT.store(true, Ordering::Relaxed);
    THRESHOLD.store(level.max(0), Ordering::Relaxed);
}

/// Returns the current threshold.
#[must_use]
pub fn level() -> i64 {
    THRESHOLD.load(Ordering::Relaxed)
}

/// Sets the threshold from a host-supplied string.
///
/// Integer input applies directly; fractional input truncates toward zero;
/// anything else is rejected silently and the threshold stays unchanged,
/// mirroring how a dynamically-typed host coerces level values.
pub fn set_level_from_str(input: &str) {
    if let Some(level) = coerce(input) {
        set_level(level);
    }
}

/// Reports whether a record of `severity` passes the gate.
///
/// A record is emitted iff its rank is at or above the threshold. The read is
/// atomic with respect to a single call.
#[must_use]
pub fn should_emit(severity: Severity) -> bool {
    i64::from(severity.rank()) >= level()
}

/// Applies ambient host configuration unless the caller configured the
/// threshold explicitly first.
pub(crate) fn store_ambient(level: i64) {
    if !EXPLICIT.load(Ordering::Relaxed) {
        THRESHOLD.store(level.max(0), Ordering::Relaxed);
    }
}

/// Lenient level coercion shared with the host-configuration reader.
pub(crate) fn coerce(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if let Ok(level) = trimmed.parse::<i64>() {
        return Some(level);
    }
    match trimmed.parse::<f64>() {
        Ok(level) if level.is_finite() => Some(level.trunc() as i64),
        _ => None,
    }
}
