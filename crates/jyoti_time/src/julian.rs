//! Julian Day ↔ proleptic Gregorian calendar conversions.
//!
//! The forward direction uses the integer Julian Day Number formula
//! (Fliegel & Van Flandern) and adds the day fraction measured from
//! midnight, so `JD = JDN - 0.5 + day_fraction`.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT, treated as UT here).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-based month). Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Integer Julian Day Number of a Gregorian calendar date (noon of that day).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month) / 12;
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Gregorian calendar date with fractional day to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed since
/// midnight, e.g. `1.5` is noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor();
    let jdn = julian_day_number(year, month, day as u32);
    jdn as f64 - 0.5 + (day_frac - day)
}

/// Convert a Julian Date to `(year, month, day_frac)` in the proleptic
/// Gregorian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let frac = shifted - z;

    let a = z as i64 + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    (year as i32, month as u32, day as f64 + frac)
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}
