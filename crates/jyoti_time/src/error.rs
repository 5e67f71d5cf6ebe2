//! Error types for calendar parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time parsing or validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A date string did not match `YYYY-MM-DD`.
    DateParse(String),
    /// A time string did not match `HH:MM` or `HH:MM:SS`.
    TimeParse(String),
    /// A month-year string did not match `Mon YYYY`.
    MonthYearParse(String),
    /// A calendar field is outside its valid range.
    OutOfRange(&'static str),
    /// The system clock reported a time before the Unix epoch.
    Clock,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::TimeParse(s) => write!(f, "invalid time '{s}', expected HH:MM[:SS]"),
            Self::MonthYearParse(s) => write!(f, "invalid month-year '{s}', expected e.g. 'Jun 2027'"),
            Self::OutOfRange(field) => write!(f, "{field} out of range"),
            Self::Clock => write!(f, "system clock is before the Unix epoch"),
        }
    }
}

impl Error for TimeError {}
