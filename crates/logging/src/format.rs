//! crates/logging/src/format.rs
//! Process-wide record line format.

use std::sync::atomic::{AtomicU8, Ordering};

use message::RecordFormat;

static FORMAT: AtomicU8 = AtomicU8::new(0);

const fn encode(format: RecordFormat) -> u8 {
    match format {
        RecordFormat::Plain => 0,
        RecordFormat::Tagged => 1,
        RecordFormat::Stamped => 2,
    }
}

const fn decode(raw: u8) -> RecordFormat {
    match raw {
        1 => RecordFormat::Tagged,
        2 => RecordFormat::Stamped,
        _ => RecordFormat::Plain,
    }
}

/// Sets the line format applied to every subsequently emitted record.
///
/// # Examples
///
/// ```
/// use logging::RecordFormat;
///
/// logging::set_record_format(RecordFormat::Tagged);
/// assert_eq!(logging::record_format(), RecordFormat::Tagged);
/// logging::set_record_format(RecordFormat::Plain);
/// ```
pub fn set_record_format(format: RecordFormat) {
    FORMAT.store(encode(format), Ordering::Relaxed);
}

/// Returns the current record line format.
#[must_use]
pub fn record_format() -> RecordFormat {
    decode(FORMAT.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_guard;

    #[test]
    fn encoding_roundtrips_every_variant() {
        for format in [
            RecordFormat::Plain,
            RecordFormat::Tagged,
            RecordFormat::Stamped,
        ] {
            assert_eq!(decode(encode(format)), format);
        }
    }

    #[test]
    fn process_format_defaults_to_plain_and_is_settable() {
        let _guard = test_guard();
        assert_eq!(record_format(), RecordFormat::Plain);

        set_record_format(RecordFormat::Stamped);
        assert_eq!(record_format(), RecordFormat::Stamped);

        set_record_format(RecordFormat::Plain);
    }
}
