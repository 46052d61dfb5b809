//! crates/message/src/render.rs
//! Safe rendering of dynamic values into bounded strings.
//!
//! The formatter is total: it never panics, never blocks, and always returns
//! a finite string, whatever graph the host hands it. Cycles, faulting
//! accessors, excessive nesting, and oversized output each collapse into a
//! sentinel marker instead of an error.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::SecondsFormat;
use rustc_hash::FxHashSet;

use crate::reflect::Reflect;
use crate::value::Value;

/// Marker substituted when a container re-enters itself.
pub const CIRCULAR_MARKER: &str = "[circular]";
/// Marker substituted when reading a value faults.
pub const UNREADABLE_MARKER: &str = "[unreadable]";
/// Marker substituted when nesting exceeds the depth limit.
pub const DEPTH_MARKER: &str = "[max-depth]";
/// Suffix appended when output is cut at the length limit.
pub const TRUNCATION_SUFFIX: &str = "…(truncated)";

/// Default maximum recursion depth.
pub const MAX_DEPTH: usize = 32;
/// Default maximum rendered characters per argument.
pub const MAX_RENDERED_CHARS: usize = 100_000;

/// Bounds applied to a single top-level rendering call.
///
/// The defaults terminate adversarial inputs; hosts embedding the facility in
/// tighter environments can shrink them per call via
/// [`render_with_limits`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderLimits {
    /// Maximum structural nesting before [`DEPTH_MARKER`] is emitted.
    pub max_depth: usize,
    /// Maximum output characters before truncation.
    pub max_chars: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_chars: MAX_RENDERED_CHARS,
        }
    }
}

/// Renders one value with the default [`RenderLimits`].
///
/// # Examples
///
/// ```
/// use message::Value;
///
/// assert_eq!(message::render(&Value::from(42)), "42");
/// assert_eq!(message::render(&Value::Null), "null");
/// assert_eq!(
///     message::render(&Value::list(vec![Value::from(1), Value::from("two")])),
///     "[1, two]",
/// );
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    render_with_limits(value, &RenderLimits::default())
}

/// Renders one value under explicit bounds.
#[must_use]
pub fn render_with_limits(value: &Value, limits: &RenderLimits) -> String {
    let mut walk = Walk {
        out: String::new(),
        chars: 0,
        visited: FxHashSet::default(),
        limits: *limits,
    };
    let truncated = walk.value(value, 0).is_err();
    let mut out = walk.out;
    if truncated {
        out.push_str(TRUNCATION_SUFFIX);
    }
    out
}

/// Renders each argument independently and joins them with a single space.
///
/// Each argument gets its own budget and its own cycle set, so one oversized
/// or cyclic argument cannot starve the rest of the call.
///
/// # Examples
///
/// ```
/// use message::Value;
///
/// let payload = message::render_args(&[Value::from("hello"), Value::from(42)]);
/// assert_eq!(payload, "hello 42");
/// ```
#[must_use]
pub fn render_args(args: &[Value]) -> String {
    render_args_with_limits(args, &RenderLimits::default())
}

/// Renders each argument under explicit bounds, space-joined.
#[must_use]
pub fn render_args_with_limits(args: &[Value], limits: &RenderLimits) -> String {
    let mut out = String::new();
    for (index, argument) in args.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&render_with_limits(argument, limits));
    }
    out
}

/// Short-circuit signal raised when the character budget is exhausted.
struct Truncated;

type Step = Result<(), Truncated>;

struct Walk {
    out: String,
    chars: usize,
    visited: FxHashSet<usize>,
    limits: RenderLimits,
}

impl Walk {
    fn push(&mut self, text: &str) -> Step {
        let length = text.chars().count();
        if self.chars + length <= self.limits.max_chars {
            self.out.push_str(text);
            self.chars += length;
            return Ok(());
        }
        for ch in text.chars() {
            if self.chars == self.limits.max_chars {
                break;
            }
            self.out.push(ch);
            self.chars += 1;
        }
        Err(Truncated)
    }

    fn value(&mut self, value: &Value, depth: usize) -> Step {
        if depth > self.limits.max_depth {
            return self.push(DEPTH_MARKER);
        }
        match value {
            Value::Null => self.push("null"),
            Value::Undefined => self.push("undefined"),
            Value::Bool(flag) => self.push(if *flag { "true" } else { "false" }),
            Value::Int(number) => self.push(&number.to_string()),
            Value::Float(number) => self.push(&format_float(*number)),
            Value::Str(text) => self.push(text),
            Value::Callable { name } => match name {
                Some(name) => {
                    self.push("[function ")?;
                    self.push(name)?;
                    self.push("]")
                }
                None => self.push("[function anonymous]"),
            },
            Value::Symbol { description } => match description {
                Some(description) => {
                    self.push("[symbol ")?;
                    self.push(description)?;
                    self.push("]")
                }
                None => self.push("[symbol]"),
            },
            Value::Timestamp(instant) => {
                self.push(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Bytes(buffer) => self.decimals(buffer.iter().map(|byte| i64::from(*byte))),
            Value::Ints(buffer) => self.decimals(buffer.iter().copied()),
            Value::WeakKeyed => self.push("[opaque weak collection]"),
            Value::Pending => self.push("[pending async value]"),
            Value::Exception { message, stack } => {
                self.push(message)?;
                if let Some(stack) = stack {
                    self.push("\n")?;
                    self.push(stack)?;
                }
                Ok(())
            }
            Value::List(items) => {
                self.enter(Rc::as_ptr(items) as usize, |walk| walk.list(items, depth))
            }
            Value::Map(entries) => {
                self.enter(Rc::as_ptr(entries) as usize, |walk| {
                    walk.keyed(entries, depth)
                })
            }
            Value::Object(adapter) => {
                self.enter(Rc::as_ptr(adapter).cast::<()>() as usize, |walk| {
                    walk.object(adapter.as_ref(), depth)
                })
            }
        }
    }

    /// Tracks a container identity for the duration of `body`.
    ///
    /// The identity is removed on exit so shared, non-cyclic references
    /// render normally; only genuine re-entry produces the circular marker.
    fn enter(&mut self, identity: usize, body: impl FnOnce(&mut Self) -> Step) -> Step {
        if !self.visited.insert(identity) {
            return self.push(CIRCULAR_MARKER);
        }
        let outcome = body(self);
        self.visited.remove(&identity);
        outcome
    }

    fn list(&mut self, items: &RefCell<Vec<Value>>, depth: usize) -> Step {
        let Ok(items) = items.try_borrow() else {
            return self.push(UNREADABLE_MARKER);
        };
        self.push("[")?;
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.push(", ")?;
            }
            self.value(item, depth + 1)?;
        }
        self.push("]")
    }

    fn keyed(&mut self, entries: &RefCell<Vec<(String, Value)>>, depth: usize) -> Step {
        let Ok(entries) = entries.try_borrow() else {
            return self.push(UNREADABLE_MARKER);
        };
        self.push("{")?;
        for (index, (key, item)) in entries.iter().enumerate() {
            if index > 0 {
                self.push(", ")?;
            }
            self.push(key)?;
            self.push(": ")?;
            self.value(item, depth + 1)?;
        }
        self.push("}")
    }

    fn object(&mut self, adapter: &dyn Reflect, depth: usize) -> Step {
        self.push("{")?;
        for (index, key) in adapter.keys().iter().enumerate() {
            if index > 0 {
                self.push(", ")?;
            }
            self.push(key)?;
            self.push(": ")?;
            match adapter.get(key) {
                Ok(field) => self.value(&field, depth + 1)?,
                Err(_) => self.push(UNREADABLE_MARKER)?,
            }
        }
        self.push("}")
    }

    fn decimals(&mut self, numbers: impl Iterator<Item = i64>) -> Step {
        self.push("[")?;
        for (index, number) in numbers.enumerate() {
            if index > 0 {
                self.push(", ")?;
            }
            self.push(&number.to_string())?;
        }
        self.push("]")
    }
}

fn format_float(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_owned()
    } else if number.is_infinite() {
        if number.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn scalars_render_canonically() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Undefined), "undefined");
        assert_eq!(render(&Value::from(true)), "true");
        assert_eq!(render(&Value::from(false)), "false");
        assert_eq!(render(&Value::from(42)), "42");
        assert_eq!(render(&Value::from(-1)), "-1");
        assert_eq!(render(&Value::from(0)), "0");
    }

    #[test]
    fn floats_use_host_spellings() {
        assert_eq!(render(&Value::from(3.14)), "3.14");
        assert_eq!(render(&Value::from(3.0_f64)), "3");
        assert_eq!(render(&Value::from(f64::NAN)), "NaN");
        assert_eq!(render(&Value::from(f64::INFINITY)), "Infinity");
        assert_eq!(render(&Value::from(f64::NEG_INFINITY)), "-Infinity");
    }

    #[test]
    fn strings_render_verbatim() {
        assert_eq!(render(&Value::from("")), "");
        assert_eq!(render(&Value::from("   ")), "   ");
        assert_eq!(render(&Value::from("line1\nline2")), "line1\nline2");
        assert_eq!(render(&Value::from("col1\tcol2")), "col1\tcol2");
        assert_eq!(
            render(&Value::from("Unicode: 你好 مرحبا Привет")),
            "Unicode: 你好 مرحبا Привет",
        );
    }

    #[test]
    fn callables_and_symbols() {
        assert_eq!(render(&Value::callable("probe")), "[function probe]");
        assert_eq!(render(&Value::anonymous_callable()), "[function anonymous]");
        assert_eq!(render(&Value::symbol("test")), "[symbol test]");
        assert_eq!(render(&Value::Symbol { description: None }), "[symbol]");
    }

    #[test]
    fn timestamps_render_iso8601_utc() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render(&Value::timestamp(instant)), "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn collections_render_recursively() {
        let list = Value::list(vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from("test"),
        ]);
        assert_eq!(render(&list), "[1, 2, 3, test]");

        let map = Value::map(vec![
            ("key", Value::from("value")),
            ("nested", Value::map(vec![("prop", Value::from(123))])),
        ]);
        assert_eq!(render(&map), "{key: value, nested: {prop: 123}}");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(render(&Value::list(Vec::new())), "[]");
        assert_eq!(render(&Value::map(Vec::<(String, Value)>::new())), "{}");
    }

    #[test]
    fn buffers_render_decimal_elements() {
        assert_eq!(render(&Value::bytes(vec![1, 2, 3])), "[1, 2, 3]");
        assert_eq!(render(&Value::ints(vec![100, 200, 300])), "[100, 200, 300]");
    }

    #[test]
    fn placeholders_render_fixed_tokens() {
        assert_eq!(render(&Value::weak()), "[opaque weak collection]");
        assert_eq!(render(&Value::pending()), "[pending async value]");
    }

    #[test]
    fn self_referential_list_emits_circular_marker() {
        let list = Value::list(vec![Value::from(1), Value::from(2), Value::from(3)]);
        if let Value::List(items) = &list {
            items.borrow_mut().push(list.clone());
        }
        assert_eq!(render(&list), "[1, 2, 3, [circular]]");
    }

    #[test]
    fn self_referential_map_emits_circular_marker() {
        let map = Value::map(vec![("name", Value::from("test"))]);
        if let Value::Map(entries) = &map {
            entries.borrow_mut().push(("self".to_owned(), map.clone()));
        }
        assert_eq!(render(&map), "{name: test, self: [circular]}");
    }

    #[test]
    fn shared_references_are_not_cycles() {
        let inner = Value::list(vec![Value::from(1)]);
        let outer = Value::list(vec![inner.clone(), inner]);
        assert_eq!(render(&outer), "[[1], [1]]");
    }

    #[test]
    fn mutual_cycle_is_detected() {
        let a = Value::list(Vec::new());
        let b = Value::list(vec![a.clone()]);
        if let Value::List(items) = &a {
            items.borrow_mut().push(b.clone());
        }
        assert_eq!(render(&a), "[[[circular]]]");
    }

    #[test]
    fn faulting_getter_is_unreadable() {
        use crate::reflect::FieldTable;

        let object = Value::object(
            FieldTable::new()
                .field("fine", Value::from(1))
                .failing("problematic", "getter raised"),
        );
        assert_eq!(render(&object), "{fine: 1, problematic: [unreadable]}");
    }

    #[test]
    fn nesting_beyond_the_depth_limit_is_cut() {
        let mut value = Value::from(0);
        for _ in 0..40 {
            value = Value::list(vec![value]);
        }
        let rendered = render(&value);
        assert!(rendered.contains(DEPTH_MARKER));
        assert!(!rendered.contains('0'));
    }

    #[test]
    fn nesting_within_the_depth_limit_is_kept() {
        let mut value = Value::from(7);
        for _ in 0..10 {
            value = Value::list(vec![value]);
        }
        let rendered = render(&value);
        assert!(rendered.contains('7'));
        assert!(!rendered.contains(DEPTH_MARKER));
    }

    #[test]
    fn oversized_output_is_truncated_with_suffix() {
        let rendered = render(&Value::from("x".repeat(150_000)));
        assert!(rendered.ends_with(TRUNCATION_SUFFIX));
        assert_eq!(
            rendered.chars().count(),
            MAX_RENDERED_CHARS + TRUNCATION_SUFFIX.chars().count(),
        );
    }

    #[test]
    fn output_within_the_budget_is_untouched() {
        let rendered = render(&Value::from("x".repeat(10_000)));
        assert_eq!(rendered.chars().count(), 10_000);
        assert!(!rendered.contains(TRUNCATION_SUFFIX));
    }

    #[test]
    fn custom_depth_limit_applies() {
        let limits = RenderLimits {
            max_depth: 2,
            max_chars: MAX_RENDERED_CHARS,
        };
        let nested = Value::list(vec![Value::list(vec![Value::list(vec![Value::from(1)])])]);
        assert_eq!(render_with_limits(&nested, &limits), "[[[[max-depth]]]]");
    }

    #[test]
    fn custom_length_limit_applies() {
        let limits = RenderLimits {
            max_depth: MAX_DEPTH,
            max_chars: 8,
        };
        let rendered = render_with_limits(&Value::from("abcdefghij"), &limits);
        assert_eq!(rendered, format!("abcdefgh{TRUNCATION_SUFFIX}"));
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let limits = RenderLimits {
            max_depth: MAX_DEPTH,
            max_chars: 3,
        };
        let rendered = render_with_limits(&Value::from("你好世界"), &limits);
        assert!(rendered.starts_with("你好世"));
    }

    #[test]
    fn exceptions_render_message_then_stack() {
        let plain = Value::Exception {
            message: "oops".to_owned(),
            stack: None,
        };
        assert_eq!(render(&plain), "oops");

        let with_stack = Value::Exception {
            message: "oops".to_owned(),
            stack: Some("caused by: disk full".to_owned()),
        };
        assert_eq!(render(&with_stack), "oops\ncaused by: disk full");
    }

    #[test]
    fn multiple_arguments_join_with_single_space() {
        let payload = render_args(&[
            Value::from("string"),
            Value::from(42),
            Value::map(vec![("obj", Value::from(true))]),
            Value::list(vec![Value::from(1), Value::from(2), Value::from(3)]),
            Value::Null,
        ]);
        assert_eq!(payload, "string 42 {obj: true} [1, 2, 3] null");
        assert_eq!(render_args(&[]), "");
    }

    #[test]
    fn each_argument_gets_its_own_budget() {
        let limits = RenderLimits {
            max_depth: MAX_DEPTH,
            max_chars: 4,
        };
        let payload =
            render_args_with_limits(&[Value::from("abcdef"), Value::from("ok")], &limits);
        assert_eq!(payload, format!("abcd{TRUNCATION_SUFFIX} ok"));
    }

    #[test]
    fn rendering_pure_values_is_deterministic() {
        let value = Value::map(vec![
            ("numbers", Value::list(vec![Value::from(1), Value::from(2.5)])),
            ("flag", Value::from(true)),
        ]);
        assert_eq!(render(&value), render(&value));
    }

    #[test]
    fn large_keyed_collections_render_every_entry() {
        let entries: Vec<(String, Value)> = (0..1000)
            .map(|index| (format!("key{index}"), Value::from(format!("value{index}"))))
            .collect();
        let rendered = render(&Value::map(entries));
        assert!(rendered.contains("key0: value0"));
        assert!(rendered.contains("key999: value999"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn limits_serde_roundtrip() {
        let limits = RenderLimits {
            max_depth: 4,
            max_chars: 64,
        };
        let json = serde_json::to_string(&limits).unwrap();
        let decoded: RenderLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, limits);
    }
}
