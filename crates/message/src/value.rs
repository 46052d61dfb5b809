//! crates/message/src/value.rs
//! Dynamic value model for records crossing from a host environment.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::reflect::Reflect;

/// A value captured from a dynamically-typed host for logging.
///
/// The variants enumerate every kind the safe formatter understands.
/// Containers (`List`, `Map`, `Object`) are shared allocations so
/// self-referential graphs are expressible; cloning a container value clones
/// the handle, not the contents, and both clones share one
/// [`identity`](Value::identity).
///
/// # Examples
///
/// ```
/// use message::Value;
///
/// let row = Value::map(vec![
///     ("name", Value::from("disk")),
///     ("used", Value::from(90)),
/// ]);
/// assert_eq!(message::render(&row), "{name: disk, used: 90}");
/// ```
#[derive(Clone)]
pub enum Value {
    /// The host's null sentinel.
    Null,
    /// The host's undefined sentinel.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number, including NaN and the infinities.
    Float(f64),
    /// A string, rendered verbatim.
    Str(String),
    /// A callable object; only the name survives the boundary.
    Callable {
        /// Declared name, if the callable has one.
        name: Option<String>,
    },
    /// An opaque identity token with an optional description.
    Symbol {
        /// Description attached at creation, if any.
        description: Option<String>,
    },
    /// An instant in time, rendered as ISO-8601 UTC.
    Timestamp(DateTime<Utc>),
    /// An ordered collection. Shared so cycles are expressible.
    List(Rc<RefCell<Vec<Value>>>),
    /// A keyed collection preserving insertion order. Shared so cycles are
    /// expressible.
    Map(Rc<RefCell<Vec<(String, Value)>>>),
    /// A byte buffer.
    Bytes(Vec<u8>),
    /// An integer buffer.
    Ints(Vec<i64>),
    /// A weak-keyed collection; contents are unenumerable by design.
    WeakKeyed,
    /// A pending asynchronous value; never awaited by the formatter.
    Pending,
    /// A foreign user object behind the host's reflection adapter.
    Object(Rc<dyn Reflect>),
    /// An error-like value with a message and optional stack text.
    Exception {
        /// The error message.
        message: String,
        /// Stack text, one frame per line, when available.
        stack: Option<String>,
    },
}

impl Value {
    /// Builds an ordered collection from owned items.
    #[must_use]
    pub fn list(items: Vec<Value>) -> Self {
        Self::List(Rc::new(RefCell::new(items)))
    }

    /// Builds a keyed collection preserving the given insertion order.
    #[must_use]
    pub fn map<K: Into<String>>(entries: Vec<(K, Value)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self::Map(Rc::new(RefCell::new(entries)))
    }

    /// Builds a named callable placeholder.
    #[must_use]
    pub fn callable(name: impl Into<String>) -> Self {
        Self::Callable {
            name: Some(name.into()),
        }
    }

    /// Builds an anonymous callable placeholder.
    #[must_use]
    pub fn anonymous_callable() -> Self {
        Self::Callable { name: None }
    }

    /// Builds a described identity token.
    #[must_use]
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol {
            description: Some(description.into()),
        }
    }

    /// Builds a timestamp value.
    #[must_use]
    pub const fn timestamp(instant: DateTime<Utc>) -> Self {
        Self::Timestamp(instant)
    }

    /// Builds a byte buffer value.
    #[must_use]
    pub const fn bytes(buffer: Vec<u8>) -> Self {
        Self::Bytes(buffer)
    }

    /// Builds an integer buffer value.
    #[must_use]
    pub const fn ints(buffer: Vec<i64>) -> Self {
        Self::Ints(buffer)
    }

    /// Builds a weak-keyed collection placeholder.
    #[must_use]
    pub const fn weak() -> Self {
        Self::WeakKeyed
    }

    /// Builds a pending asynchronous value placeholder.
    #[must_use]
    pub const fn pending() -> Self {
        Self::Pending
    }

    /// Wraps a host object behind its reflection adapter.
    #[must_use]
    pub fn object(adapter: impl Reflect + 'static) -> Self {
        Self::Object(Rc::new(adapter))
    }

    /// Captures an error as an exception value.
    ///
    /// The message is the error's `Display` output; the stack text is the
    /// source chain, one `caused by:` line per link, or `None` when the error
    /// has no source.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Value;
    ///
    /// let error = std::io::Error::new(std::io::ErrorKind::Other, "oops");
    /// let value = Value::from_error(&error);
    /// assert!(message::render(&value).starts_with("oops"));
    /// ```
    #[must_use]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        let message = error.to_string();
        let mut frames = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            frames.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        let stack = if frames.is_empty() {
            None
        } else {
            Some(frames.join("\n"))
        };
        Self::Exception { message, stack }
    }

    /// Returns the identity of a shared container, if this value has one.
    ///
    /// Identity is the address of the shared allocation; two handles to the
    /// same container compare equal while structurally identical but distinct
    /// containers do not. The cycle detector relies on this, never on
    /// structural equality.
    #[must_use]
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(Rc::as_ptr(items) as usize),
            Self::Map(entries) => Some(Rc::as_ptr(entries) as usize),
            Self::Object(adapter) => Some(Rc::as_ptr(adapter).cast::<()>() as usize),
            _ => None,
        }
    }

    /// Returns a short name for the value's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Callable { .. } => "callable",
            Self::Symbol { .. } => "symbol",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Bytes(_) => "bytes",
            Self::Ints(_) => "ints",
            Self::WeakKeyed => "weak",
            Self::Pending => "pending",
            Self::Object(_) => "object",
            Self::Exception { .. } => "exception",
        }
    }
}

// Shallow by intent: a derived Debug would recurse into shared containers
// and overflow on cyclic graphs.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "Bool({value})"),
            Self::Int(value) => write!(f, "Int({value})"),
            Self::Float(value) => write!(f, "Float({value})"),
            Self::Str(value) => write!(f, "Str({value:?})"),
            Self::Callable { name } => write!(f, "Callable({name:?})"),
            Self::Symbol { description } => write!(f, "Symbol({description:?})"),
            Self::Timestamp(instant) => write!(f, "Timestamp({instant})"),
            Self::List(items) => match items.try_borrow() {
                Ok(items) => write!(f, "List(len={})", items.len()),
                Err(_) => f.write_str("List(<borrowed>)"),
            },
            Self::Map(entries) => match entries.try_borrow() {
                Ok(entries) => write!(f, "Map(len={})", entries.len()),
                Err(_) => f.write_str("Map(<borrowed>)"),
            },
            Self::Bytes(buffer) => write!(f, "Bytes(len={})", buffer.len()),
            Self::Ints(buffer) => write!(f, "Ints(len={})", buffer.len()),
            Self::Object(_) => f.write_str("Object"),
            Self::Exception { message, .. } => write!(f, "Exception({message:?})"),
            Self::Null | Self::Undefined | Self::WeakKeyed | Self::Pending => {
                f.write_str(self.kind())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Timestamp(instant)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::list(items)
    }
}

impl From<Vec<u8>> for Value {
    fn from(buffer: Vec<u8>) -> Self {
        Self::Bytes(buffer)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// Maps `None` to the host's null sentinel.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
