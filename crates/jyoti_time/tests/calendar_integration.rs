//! Integration tests for calendar conversions and civil time parsing.

use jyoti_time::{
    CivilDateTime, J2000_JD, MonthYear, TimeError, calendar_to_jd, jd_to_calendar,
    julian_day_number,
};

// ---------------------------------------------------------------------------
// Julian Day
// ---------------------------------------------------------------------------

#[test]
fn jdn_matches_calendar_to_jd_at_noon() {
    for &(y, m, d) in &[(2000, 1, 1), (1900, 3, 1), (2024, 2, 29), (1582, 10, 15)] {
        let jdn = julian_day_number(y, m, d);
        let jd = calendar_to_jd(y, m, d as f64 + 0.5);
        assert!((jd - jdn as f64).abs() < 1e-9, "{y}-{m}-{d}: jd={jd} jdn={jdn}");
    }
}

#[test]
fn consecutive_days_differ_by_one() {
    let a = calendar_to_jd(2023, 12, 31.0);
    let b = calendar_to_jd(2024, 1, 1.0);
    assert!((b - a - 1.0).abs() < 1e-12);
}

#[test]
fn jd_to_calendar_sweep() {
    let start = calendar_to_jd(1950, 1, 1.0);
    for i in 0..40_000 {
        let jd = start + i as f64 * 1.37;
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-6, "jd {jd} -> {y}-{m}-{d} -> {back}");
    }
}

// ---------------------------------------------------------------------------
// Civil time
// ---------------------------------------------------------------------------

#[test]
fn ist_birth_to_jd() {
    // 1990-08-15 14:30 IST is 09:00 UTC
    let t = CivilDateTime::parse("1990-08-15", "14:30", 5.5).unwrap();
    let utc = CivilDateTime::utc(1990, 8, 15, 9, 0).unwrap();
    assert!((t.to_jd_utc() - utc.to_jd_utc()).abs() < 1e-9);
}

#[test]
fn j2000_via_iso() {
    let t = CivilDateTime::parse_iso("2000-01-01T12:00:00Z", 5.5).unwrap();
    assert!((t.to_jd_utc() - J2000_JD).abs() < 1e-9);
}

#[test]
fn parse_errors_are_typed() {
    match CivilDateTime::parse("2024/01/01", "10:00", 0.0) {
        Err(TimeError::DateParse(s)) => assert_eq!(s, "2024/01/01"),
        other => panic!("unexpected {other:?}"),
    }
    match CivilDateTime::parse("2024-01-01", "10h", 0.0) {
        Err(TimeError::TimeParse(_)) => {}
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn civil_serde_camel_case() {
    let t = CivilDateTime::parse("2024-01-15", "09:05", 5.5).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert!(json.contains("\"tzOffsetHours\":5.5"), "{json}");
    let back: CivilDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

// ---------------------------------------------------------------------------
// MonthYear
// ---------------------------------------------------------------------------

#[test]
fn month_year_from_civil() {
    let t = CivilDateTime::parse("2027-06-10", "00:00", 0.0).unwrap();
    let m = MonthYear::from(&t);
    assert_eq!(m, "Jun 2027".parse().unwrap());
}

#[test]
fn month_year_sorts_chronologically() {
    let mut v: Vec<MonthYear> = ["Mar 2025", "Apr 2022", "Jan 2020", "2025-01"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    v.sort();
    let names: Vec<String> = v.iter().map(|m| m.to_string()).collect();
    assert_eq!(names, ["Jan 2020", "Apr 2022", "Jan 2025", "Mar 2025"]);
}

#[test]
fn month_year_serde_as_string() {
    let m = MonthYear::new(2027, 6).unwrap();
    assert_eq!(serde_json::to_string(&m).unwrap(), "\"Jun 2027\"");
    let back: MonthYear = serde_json::from_str("\"2027-06\"").unwrap();
    assert_eq!(back, m);
    assert!(serde_json::from_str::<MonthYear>("\"Smarch 2027\"").is_err());
}
