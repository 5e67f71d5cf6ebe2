//! Errors and non-fatal warnings for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_time::{MonthYear, TimeError};
use serde::Serialize;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from date/time parsing or conversion.
    Time(TimeError),
    /// Caller-supplied data cannot be used: wrong cusp count, a birth
    /// instant after "now", a malformed transit table.
    Configuration(String),
    /// A numeric input is NaN or infinite.
    NonFinite(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::NonFinite(what) => write!(f, "{what} must be a finite number"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Recoverable conditions reported alongside a best-effort result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VedicWarning {
    /// A name did not match any table entry; a documented default was used.
    #[serde(rename_all = "camelCase")]
    UnresolvedLookup { table: &'static str, input: String },
    /// The requested instant lies outside a table's validity range.
    #[serde(rename_all = "camelCase")]
    StaleTable {
        table: String,
        valid_through: MonthYear,
    },
}

impl Display for VedicWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedLookup { table, input } => {
                write!(f, "unresolved {table} '{input}', default used")
            }
            Self::StaleTable {
                table,
                valid_through,
            } => write!(
                f,
                "table {table} is valid through {valid_through}, fallback used"
            ),
        }
    }
}
