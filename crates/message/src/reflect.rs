//! crates/message/src/reflect.rs
//! Reflection boundary for foreign user objects.

use thiserror::Error;

use crate::value::Value;

/// Fault raised while reading a property through a [`Reflect`] adapter.
///
/// The safe formatter never surfaces this to callers; it substitutes the
/// unreadable marker and continues. The type exists so adapters can report
/// what failed when a host getter faults.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("reading property `{key}` failed: {reason}")]
pub struct FieldFault {
    /// The property that could not be read.
    pub key: String,
    /// Host-supplied description of the failure.
    pub reason: String,
}

impl FieldFault {
    /// Builds a fault for the given property.
    #[must_use]
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Adapter through which foreign user objects cross into the value model.
///
/// Hosts with property getters that may fault return `Err` from
/// [`get`](Reflect::get); the formatter absorbs the fault locally. Key order
/// is the host's insertion order and drives rendering order.
pub trait Reflect {
    /// Returns the object's keys in insertion order.
    fn keys(&self) -> Vec<String>;

    /// Reads one property.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldFault`] when the underlying accessor faults.
    fn get(&self, key: &str) -> Result<Value, FieldFault>;
}

enum Entry {
    Readable(Value),
    Faulting(String),
}

/// Reference [`Reflect`] implementation backed by an ordered field table.
///
/// Useful for hosts that materialise objects eagerly and for tests that need
/// an object with a faulting getter.
///
/// # Examples
///
/// ```
/// use message::{FieldTable, Value};
///
/// let object = FieldTable::new()
///     .field("name", Value::from("probe"))
///     .failing("x", "getter raised");
///
/// let rendered = message::render(&Value::object(object));
/// assert_eq!(rendered, "{name: probe, x: [unreadable]}");
/// ```
#[derive(Default)]
pub struct FieldTable {
    entries: Vec<(String, Entry)>,
}

impl FieldTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a readable field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.push((key.into(), Entry::Readable(value)));
        self
    }

    /// Appends a field whose read faults with the given reason.
    #[must_use]
    pub fn failing(mut self, key: impl Into<String>, reason: impl Into<String>) -> Self {
        self.entries
            .push((key.into(), Entry::Faulting(reason.into())));
        self
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the table has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Reflect for FieldTable {
    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    fn get(&self, key: &str) -> Result<Value, FieldFault> {
        match self.entries.iter().find(|(name, _)| name == key) {
            Some((_, Entry::Readable(value))) => Ok(value.clone()),
            Some((_, Entry::Faulting(reason))) => Err(FieldFault::new(key, reason.clone())),
            None => Err(FieldFault::new(key, "no such property")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_preserve_insertion_order() {
        let table = FieldTable::new()
            .field("z", Value::from(1))
            .field("a", Value::from(2))
            .field("m", Value::from(3));
        assert_eq!(table.keys(), vec!["z", "a", "m"]);
    }

    #[test]
    fn get_reads_stored_values() {
        let table = FieldTable::new().field("answer", Value::from(42));
        match table.get("answer") {
            Ok(Value::Int(42)) => {}
            other => panic!("unexpected read result: {other:?}"),
        }
    }

    #[test]
    fn faulting_fields_return_the_fault() {
        let table = FieldTable::new().failing("x", "boom");
        let fault = table.get("x").unwrap_err();
        assert_eq!(fault.key, "x");
        assert_eq!(fault.reason, "boom");
        assert_eq!(fault.to_string(), "reading property `x` failed: boom");
    }

    #[test]
    fn missing_keys_fault() {
        let table = FieldTable::new();
        assert!(table.get("absent").is_err());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
