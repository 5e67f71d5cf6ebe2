//! Month-precision calendar dates.
//!
//! Hand-maintained transit tables list sign changes by month only
//! ("Jun 2027"). `MonthYear` compares such dates through a fractional year
//! `year + (month - 1) / 12`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::civil::CivilDateTime;
use crate::error::TimeError;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month of a specific year.
///
/// Serializes as its display form, e.g. `"Jun 2027"`. The month is always
/// in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthYear {
    year: i32,
    month: u32,
}

impl MonthYear {
    /// Build a month-year, validating the month.
    pub fn new(year: i32, month: u32) -> Result<Self, TimeError> {
        Self::checked(year, month).ok_or(TimeError::OutOfRange("month"))
    }

    /// `None` unless `month` is in `1..=12`. Usable in constants.
    pub const fn checked(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub const fn month(self) -> u32 {
        self.month
    }

    /// `year + (month - 1) / 12`.
    pub fn fractional_year(self) -> f64 {
        self.year as f64 + (self.month - 1) as f64 / 12.0
    }

    /// The calendar month before this one.
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Same month, `years` years later (negative for earlier).
    pub fn shift_years(self, years: i32) -> Self {
        Self {
            year: self.year + years,
            month: self.month,
        }
    }

    /// Three-letter English month abbreviation.
    pub fn month_abbrev(self) -> &'static str {
        MONTH_ABBREV[(self.month - 1) as usize]
    }
}

impl From<&CivilDateTime> for MonthYear {
    fn from(t: &CivilDateTime) -> Self {
        Self {
            year: t.year,
            month: t.month,
        }
    }
}

impl Display for MonthYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_abbrev(), self.year)
    }
}

impl TryFrom<String> for MonthYear {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthYear> for String {
    fn from(m: MonthYear) -> Self {
        m.to_string()
    }
}

impl FromStr for MonthYear {
    type Err = TimeError;

    /// Accepts `"Jun 2027"`, `"June 2027"` or `"2027-06"`. Month names match
    /// case-insensitively, either in full or as the exact abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::MonthYearParse(s.to_string());
        let trimmed = s.trim();

        if let Some((y, m)) = trimmed.split_once('-') {
            let year = y.parse().map_err(|_| err())?;
            let month = m.parse().map_err(|_| err())?;
            return Self::new(year, month);
        }

        let mut parts = trimmed.split_whitespace();
        let name = parts.next().ok_or_else(err)?;
        let year = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        let month = MONTH_ABBREV
            .iter()
            .zip(MONTH_NAMES)
            .position(|(abbrev, full)| {
                name.eq_ignore_ascii_case(abbrev) || name.eq_ignore_ascii_case(full)
            })
            .ok_or_else(err)?;
        Self::new(year, month as u32 + 1)
    }
}
