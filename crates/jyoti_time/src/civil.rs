//! Civil (wall-clock) date/time with a fixed timezone offset.
//!
//! Birth records arrive as a local date, a local `HH:MM` time and an offset
//! in hours east of UTC. `CivilDateTime` keeps those fields as given and
//! converts to a UTC Julian Date on demand.

use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, jd_to_calendar};

/// Largest timezone offset accepted, in hours (UTC+14 is the real maximum).
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Local calendar date and time plus its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Hours east of UTC, e.g. `5.5` for IST.
    pub tz_offset_hours: f64,
}

impl CivilDateTime {
    /// Build a validated civil date/time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        tz_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::OutOfRange("month"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::OutOfRange("day"));
        }
        if hour > 23 {
            return Err(TimeError::OutOfRange("hour"));
        }
        if minute > 59 {
            return Err(TimeError::OutOfRange("minute"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::OutOfRange("second"));
        }
        if !tz_offset_hours.is_finite() || tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS {
            return Err(TimeError::OutOfRange("timezone offset"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz_offset_hours,
        })
    }

    /// Whole-minute instant at UTC.
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, 0.0, 0.0)
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM` or `HH:MM:SS` time.
    pub fn parse(date: &str, time: &str, tz_offset_hours: f64) -> Result<Self, TimeError> {
        let (year, month, day) = parse_date(date)?;
        let (hour, minute, second) = parse_time(time)?;
        Self::new(year, month, day, hour, minute, second, tz_offset_hours)
    }

    /// Parse an ISO-8601 style `YYYY-MM-DDTHH:MM[:SS]` string.
    ///
    /// A trailing `Z` or `±HH:MM` offset overrides `default_tz_hours`.
    pub fn parse_iso(s: &str, default_tz_hours: f64) -> Result<Self, TimeError> {
        let s = s.trim();
        let (date, rest) = match s.split_once(['T', ' ']) {
            Some(parts) => parts,
            None => return Self::parse(s, "00:00", default_tz_hours),
        };
        let (time, tz) = split_offset(rest)?;
        Self::parse(date, time, tz.unwrap_or(default_tz_hours))
    }

    /// Current system time, expressed with the given offset.
    pub fn now(tz_offset_hours: f64) -> Result<Self, TimeError> {
        Ok(Self::from_jd_utc(now_jd_utc()?, tz_offset_hours))
    }

    /// Hours since local midnight.
    pub fn local_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date (UTC) of this instant.
    pub fn to_jd_utc(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
            + (self.local_hours() - self.tz_offset_hours) / 24.0
    }

    /// Express a UTC Julian Date as local civil time with the given offset.
    ///
    /// The instant is rounded to the nearest millisecond so that values
    /// produced by [`Self::to_jd_utc`] come back with the same clock fields.
    pub fn from_jd_utc(jd_utc: f64, tz_offset_hours: f64) -> Self {
        const MS_PER_DAY: i64 = 86_400_000;
        let jd_local = jd_utc + tz_offset_hours / 24.0;
        let total_ms = ((jd_local + 0.5) * MS_PER_DAY as f64).round() as i64;
        let jdn = total_ms.div_euclid(MS_PER_DAY);
        let ms_of_day = total_ms.rem_euclid(MS_PER_DAY);
        let (year, month, day_frac) = jd_to_calendar(jdn as f64);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour: (ms_of_day / 3_600_000) as u32,
            minute: ((ms_of_day / 60_000) % 60) as u32,
            second: (ms_of_day % 60_000) as f64 / 1000.0,
            tz_offset_hours,
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.tz_offset_hours < 0.0 { '-' } else { '+' };
        let total_minutes = (self.tz_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32,
            sign,
            total_minutes / 60,
            total_minutes % 60
        )
    }
}

/// Current UTC time as a Julian Date, from the system clock.
pub fn now_jd_utc() -> Result<f64, TimeError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TimeError::Clock)?;
    Ok(UNIX_EPOCH_JD + elapsed.as_secs_f64() / SECONDS_PER_DAY)
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let err = || TimeError::DateParse(s.to_string());
    let mut parts = s.trim().splitn(3, '-');
    let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let err = || TimeError::TimeParse(s.to_string());
    let mut parts = s.trim().split(':');
    let hour = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let minute = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let second = match parts.next() {
        Some(p) => p.parse().map_err(|_| err())?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return Err(err());
    }
    Ok((hour, minute, second))
}

fn split_offset(s: &str) -> Result<(&str, Option<f64>), TimeError> {
    if let Some(time) = s.strip_suffix('Z') {
        return Ok((time, Some(0.0)));
    }
    // Time part has no '+'/'-', so the last one (if any) starts the offset.
    match s.rfind(['+', '-']) {
        Some(pos) => {
            let (time, offset) = s.split_at(pos);
            let sign = if offset.starts_with('-') { -1.0 } else { 1.0 };
            let (h, m) = parse_time(&offset[1..])
                .map(|(h, m, _)| (h, m))
                .map_err(|_| TimeError::TimeParse(s.to_string()))?;
            Ok((time, Some(sign * (h as f64 + m as f64 / 60.0))))
        }
        None => Ok((s, None)),
    }
}
