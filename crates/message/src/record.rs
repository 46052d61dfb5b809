//! crates/message/src/record.rs
//! Ephemeral debug records and their line rendering.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::severity::Severity;

/// Controls the prefix prepended when a [`Record`] is rendered into a line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordFormat {
    /// Emit the payload alone.
    #[default]
    Plain,
    /// Prefix with the severity tag: `[WARN] payload`.
    Tagged,
    /// Prefix with the capture timestamp and severity tag:
    /// `[2023-01-01T00:00:00.000Z] [WARN] payload`.
    Stamped,
}

/// One formatted debug record.
///
/// Records are constructed per call, rendered, handed to a sink, and
/// discarded; nothing persists them. The timestamp is captured before
/// argument formatting begins, so slow formatting cannot skew it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use message::{Record, RecordFormat, Severity};
///
/// let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// let record = Record::new(Severity::Warn, instant, "disk 90%".to_owned());
///
/// assert_eq!(record.to_line(RecordFormat::Plain), "disk 90%");
/// assert_eq!(record.to_line(RecordFormat::Tagged), "[WARN] disk 90%");
/// assert_eq!(
///     record.to_line(RecordFormat::Stamped),
///     "[2023-01-01T00:00:00.000Z] [WARN] disk 90%",
/// );
/// ```
#[derive(Clone, Debug)]
#[must_use = "records must be rendered and emitted to reach a sink"]
pub struct Record {
    severity: Severity,
    timestamp: DateTime<Utc>,
    payload: String,
}

impl Record {
    /// Builds a record from its parts.
    pub const fn new(severity: Severity, timestamp: DateTime<Utc>, payload: String) -> Self {
        Self {
            severity,
            timestamp,
            payload,
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the instant captured when the originating call began.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the formatted payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Renders the record into the line handed to a sink.
    #[must_use]
    pub fn to_line(&self, format: RecordFormat) -> String {
        match format {
            RecordFormat::Plain => self.payload.clone(),
            RecordFormat::Tagged => format!("[{}] {}", self.severity.tag(), self.payload),
            RecordFormat::Stamped => format!(
                "[{}] [{}] {}",
                self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                self.severity.tag(),
                self.payload,
            ),
        }
    }

    /// Consumes the record and returns the payload.
    #[must_use]
    pub fn into_payload(self) -> String {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn accessors_return_constructor_parts() {
        let record = Record::new(Severity::Error, fixed_instant(), "boom".to_owned());
        assert_eq!(record.severity(), Severity::Error);
        assert_eq!(record.timestamp(), fixed_instant());
        assert_eq!(record.payload(), "boom");
    }

    #[test]
    fn plain_line_is_the_payload() {
        let record = Record::new(Severity::Info, fixed_instant(), "hello 42".to_owned());
        assert_eq!(record.to_line(RecordFormat::Plain), "hello 42");
    }

    #[test]
    fn tagged_line_prefixes_the_severity() {
        let record = Record::new(Severity::Warn, fixed_instant(), "disk 90%".to_owned());
        assert_eq!(record.to_line(RecordFormat::Tagged), "[WARN] disk 90%");
    }

    #[test]
    fn stamped_line_prefixes_timestamp_and_severity() {
        let record = Record::new(Severity::Info, fixed_instant(), "ready".to_owned());
        assert_eq!(
            record.to_line(RecordFormat::Stamped),
            "[2023-01-01T12:30:45.000Z] [INFO] ready",
        );
    }

    #[test]
    fn default_format_is_plain() {
        assert_eq!(RecordFormat::default(), RecordFormat::Plain);
    }

    #[test]
    fn into_payload_consumes_the_record() {
        let record = Record::new(Severity::Info, fixed_instant(), "payload".to_owned());
        assert_eq!(record.into_payload(), "payload");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_format_serde_roundtrip() {
        let json = serde_json::to_string(&RecordFormat::Stamped).unwrap();
        let decoded: RecordFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, RecordFormat::Stamped);
    }
}
