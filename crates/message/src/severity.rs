//! crates/message/src/severity.rs
//! Severity levels for debug records.

use std::fmt;
use std::str::FromStr;

/// Severity of a debug record.
///
/// The three variants are totally ordered `Info < Warn < Error`; the derived
/// [`Ord`] implementation and [`rank`](Severity::rank) expose the same
/// ordering so the level gate can compare a record against the process
/// threshold numerically.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational record.
    Info,
    /// Warning record.
    Warn,
    /// Error record.
    Error,
}

impl Severity {
    /// Returns the numeric rank used by the level gate.
    ///
    /// Ranks are dense and start at zero so a threshold of `0` admits every
    /// severity and a threshold of `rank(Error) + 1` admits none.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Info.rank(), 0);
    /// assert_eq!(Severity::Warn.rank(), 1);
    /// assert_eq!(Severity::Error.rank(), 2);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Info => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }

    /// Returns the lowercase label used when rendering the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "info");
    /// assert_eq!(Severity::Warn.as_str(), "warn");
    /// assert_eq!(Severity::Error.as_str(), "error");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the uppercase tag rendered inside record prefixes.
    ///
    /// The tag feeds [`RecordFormat::Tagged`](crate::RecordFormat::Tagged)
    /// and [`RecordFormat::Stamped`](crate::RecordFormat::Stamped) line
    /// rendering, keeping the canonical spelling in one place.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Warn.tag(), "WARN");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Reports whether this severity is informational.
    #[must_use]
    pub const fn is_info(self) -> bool {
        matches!(self, Self::Info)
    }

    /// Reports whether this severity is a warning.
    #[must_use]
    pub const fn is_warn(self) -> bool {
        matches!(self, Self::Warn)
    }

    /// Reports whether this severity is an error.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised record severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
