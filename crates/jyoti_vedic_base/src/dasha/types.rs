//! Core dasha types.

use jyoti_time::CivilDateTime;
use serde::Serialize;

use crate::graha::Graha;

/// Year length for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period, positioned relative to birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    #[serde(rename = "planet")]
    pub graha: Graha,
    pub level: DashaLevel,
    /// Years from birth to the start, inclusive. Negative when the period
    /// began before birth.
    pub start_offset_years: f64,
    pub duration_years: f64,
}

impl DashaPeriod {
    /// Years from birth to the end, exclusive.
    pub fn end_offset_years(&self) -> f64 {
        self.start_offset_years + self.duration_years
    }

    /// Half-open containment: `start <= offset < end`.
    pub fn contains(&self, offset_years: f64) -> bool {
        offset_years >= self.start_offset_years && offset_years < self.end_offset_years()
    }

    /// Start instant, given the birth instant.
    pub fn start_at(&self, birth: &CivilDateTime) -> CivilDateTime {
        offset_instant(birth, self.start_offset_years)
    }

    /// End instant, given the birth instant.
    pub fn end_at(&self, birth: &CivilDateTime) -> CivilDateTime {
        offset_instant(birth, self.end_offset_years())
    }
}

/// `from + years` (365.25-day years), in `from`'s timezone.
pub(crate) fn offset_instant(from: &CivilDateTime, years: f64) -> CivilDateTime {
    CivilDateTime::from_jd_utc(
        from.to_jd_utc() + years * DAYS_PER_YEAR,
        from.tz_offset_hours,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_levels() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pratyantardasha.child_level(), None);
    }

    #[test]
    fn half_open_containment() {
        let p = DashaPeriod {
            graha: Graha::Ketu,
            level: DashaLevel::Mahadasha,
            start_offset_years: 0.0,
            duration_years: 7.0,
        };
        assert!(p.contains(0.0));
        assert!(p.contains(6.999));
        assert!(!p.contains(7.0));
        assert!(!p.contains(-0.1));
    }

    #[test]
    fn instants_from_offsets() {
        let birth = CivilDateTime::utc(2000, 1, 1, 0, 0).unwrap();
        let p = DashaPeriod {
            graha: Graha::Ketu,
            level: DashaLevel::Mahadasha,
            start_offset_years: 1.0,
            duration_years: 2.0,
        };
        let s = p.start_at(&birth);
        // 365.25 days after 2000-01-01 00:00 is 2000-12-31 06:00
        assert_eq!((s.year, s.month, s.day, s.hour), (2000, 12, 31, 6));
        let e = p.end_at(&birth);
        assert_eq!((e.year, e.month, e.day, e.hour), (2002, 12, 31, 18));
    }
}
