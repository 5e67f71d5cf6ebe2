//! Calendar and time handling for the jyoti engine.
//!
//! This crate provides:
//! - Julian Day ↔ proleptic Gregorian calendar conversions
//! - `CivilDateTime`, a local date/time with a fixed UTC offset
//! - `MonthYear`, the month-precision dates used by transit tables

pub mod civil;
pub mod error;
pub mod julian;
pub mod month;

pub use civil::{CivilDateTime, MAX_TZ_OFFSET_HOURS, now_jd_utc};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, days_since_j2000,
    is_leap_year, jd_to_calendar, julian_day_number,
};
pub use month::MonthYear;
