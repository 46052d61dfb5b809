//! crates/logging/src/host.rs
//! Host configuration hook read once at first use.

use std::sync::Once;

use crate::threshold::{self, SILENCE_ALL};

/// Name of the host flag that enables or silences the facility.
pub const DEBUG_ENABLED_VAR: &str = "DEBUG_ENABLED";
/// Name of the host value that seeds the threshold.
pub const DEBUG_LEVEL_VAR: &str = "DEBUG_LEVEL";

/// Configuration surface supplied by the embedding host.
///
/// The facility reads it once, at explicit [`init`] or lazily on the first
/// record, and never again. Hosts without a global configuration mechanism
/// can return `None` from both methods.
pub trait HostConfig {
    /// Looks up a boolean-coercible flag.
    fn flag(&self, name: &str) -> Option<bool>;

    /// Looks up an integer-coercible value.
    fn integer(&self, name: &str) -> Option<i64>;
}

/// [`HostConfig`] implementation backed by the process environment.
///
/// Flag coercion follows the host convention: absent means unset; empty,
/// `0`, `false`, `no`, and `off` (case-insensitive) are falsy; every other
/// present value is truthy. Integer coercion uses the same lenient rules as
/// [`crate::set_level_from_str`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl HostConfig for EnvConfig {
    fn flag(&self, name: &str) -> Option<bool> {
        std::env::var(name).ok().map(|raw| truthy(&raw))
    }

    fn integer(&self, name: &str) -> Option<i64> {
        std::env::var(name).ok().and_then(|raw| threshold::coerce(&raw))
    }
}

fn truthy(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

static INIT: Once = Once::new();

/// Initialises the facility from the process environment.
///
/// A falsy [`DEBUG_ENABLED_VAR`] silences all output; [`DEBUG_LEVEL_VAR`]
/// seeds the threshold. Only the first initialisation in the process takes
/// effect, and an explicit [`crate::set_level`] call always wins over the
/// ambient values.
pub fn init() {
    init_with(&EnvConfig);
}

/// Initialises the facility from a custom [`HostConfig`].
pub fn init_with(host: &dyn HostConfig) {
    INIT.call_once(|| apply(host));
}

/// First-use initialisation performed by the entry points.
pub(crate) fn ensure_init() {
    init_with(&EnvConfig);
}

fn apply(host: &dyn HostConfig) {
    if let Some(false) = host.flag(DEBUG_ENABLED_VAR) {
        threshold::store_ambient(SILENCE_ALL);
    }
    if let Some(level) = host.integer(DEBUG_LEVEL_VAR) {
        threshold::store_ambient(level);
    }
}
