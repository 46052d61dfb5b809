//! crates/logging/src/macros.rs
//! Variadic entry-point macros.
//!
//! Each macro converts its arguments through [`Value::from`](crate::Value)
//! and forwards to the matching function, giving call sites the variadic
//! shape of a host console.

/// Emits an informational record from a variadic argument list.
///
/// # Example
/// ```
/// logging::log!("hello", 42);
/// ```
#[macro_export]
macro_rules! log {
    () => {
        $crate::log(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::log(&[$($crate::Value::from($arg)),+])
    };
}

/// Emits a warning record from a variadic argument list.
///
/// # Example
/// ```
/// logging::warn!("disk 90%");
/// ```
#[macro_export]
macro_rules! warn {
    () => {
        $crate::warn(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::warn(&[$($crate::Value::from($arg)),+])
    };
}

/// Emits an error record from a variadic argument list.
///
/// # Example
/// ```
/// logging::error!("request failed", 503);
/// ```
#[macro_export]
macro_rules! error {
    () => {
        $crate::error(&[])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::error(&[$($crate::Value::from($arg)),+])
    };
}
