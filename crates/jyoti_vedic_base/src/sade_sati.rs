//! Saturn sign lookup and Sade Sati windows.
//!
//! Saturn's sidereal sign changes roughly every 2.5 years. Rather than
//! compute it, the engine reads a hand-maintained, month-precision transit
//! table. The table is a value: callers can load a newer one, and every
//! lookup outside its range is reported as stale.
//!
//! Sade Sati is Saturn's passage through the 12th, 1st and 2nd signs from
//! the natal Moon, about seven and a half years.

use std::fmt::{Display, Formatter};

use jyoti_time::{CivilDateTime, MonthYear};
use serde::{Deserialize, Serialize};

use crate::error::{VedicError, VedicWarning};
use crate::log::warn;
use crate::rashi::Rashi;

/// Mean sidereal period of Saturn, in years.
pub const SATURN_CYCLE_YEARS: f64 = 29.43;

/// One Saturn sign occupancy: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturnTransitEntry {
    pub sign: Rashi,
    pub start: MonthYear,
    pub end: MonthYear,
}

impl SaturnTransitEntry {
    pub fn contains(&self, at: MonthYear) -> bool {
        let t = at.fractional_year();
        t >= self.start.fractional_year() && t < self.end.fractional_year()
    }

    /// The same occupancy `cycles` Saturn cycles later (negative for
    /// earlier). Only the year moves; the month is kept.
    pub fn shifted(&self, cycles: i32) -> Self {
        let years = (cycles as f64 * SATURN_CYCLE_YEARS).round() as i32;
        Self {
            sign: self.sign,
            start: self.start.shift_years(years),
            end: self.end.shift_years(years),
        }
    }
}

// Only called in constants, so a bad month fails the build.
const fn my(year: i32, month: u32) -> MonthYear {
    match MonthYear::checked(year, month) {
        Some(m) => m,
        None => panic!("month out of range"),
    }
}

/// Reported by the range accessors of an empty table.
const UNSET_MONTH: MonthYear = my(0, 1);

const fn entry(sign: Rashi, start: MonthYear, end: MonthYear) -> SaturnTransitEntry {
    SaturnTransitEntry { sign, start, end }
}

/// Built-in table, Jan 2020 to Aug 2050 (Lahiri sidereal, approximate).
pub const BUILTIN_SATURN_TRANSITS: [SaturnTransitEntry; 12] = [
    entry(Rashi::Makara, my(2020, 1), my(2022, 4)),
    entry(Rashi::Kumbha, my(2022, 4), my(2025, 3)),
    entry(Rashi::Meena, my(2025, 3), my(2027, 6)),
    entry(Rashi::Mesha, my(2027, 6), my(2029, 10)),
    entry(Rashi::Vrishabha, my(2029, 10), my(2032, 1)),
    entry(Rashi::Mithuna, my(2032, 1), my(2034, 4)),
    entry(Rashi::Karka, my(2034, 4), my(2037, 6)),
    entry(Rashi::Simha, my(2037, 6), my(2039, 9)),
    entry(Rashi::Kanya, my(2039, 9), my(2042, 11)),
    entry(Rashi::Tula, my(2042, 11), my(2045, 2)),
    entry(Rashi::Vrischika, my(2045, 2), my(2047, 5)),
    entry(Rashi::Dhanu, my(2047, 5), my(2050, 8)),
];

/// Version tag of the built-in table.
pub const BUILTIN_TABLE_VERSION: &str = "2020-01/2050-08";

/// Sign reported when the built-in table does not cover the instant.
pub const BUILTIN_FALLBACK_SIGN: Rashi = Rashi::Meena;

/// A versioned, validated Saturn transit table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaturnTransitTable {
    version: String,
    entries: Vec<SaturnTransitEntry>,
    fallback: Rashi,
}

impl SaturnTransitTable {
    /// The table shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_TABLE_VERSION.to_string(),
            entries: BUILTIN_SATURN_TRANSITS.to_vec(),
            fallback: BUILTIN_FALLBACK_SIGN,
        }
    }

    /// Build a custom table.
    ///
    /// Entries must be non-empty, each with `start < end`, in chronological
    /// order without overlap, and name each sign at most once.
    pub fn new(
        version: impl Into<String>,
        entries: Vec<SaturnTransitEntry>,
        fallback: Rashi,
    ) -> Result<Self, VedicError> {
        let version = version.into();
        let invalid = |msg: String| {
            Err(VedicError::Configuration(format!(
                "Saturn table {version}: {msg}"
            )))
        };
        if entries.is_empty() {
            return invalid("no entries".to_string());
        }
        for e in &entries {
            if e.start >= e.end {
                return invalid(format!("{} entry ends before it starts", e.sign));
            }
        }
        for w in entries.windows(2) {
            if w[1].start < w[0].end {
                return invalid(format!("{} overlaps or precedes {}", w[1].sign, w[0].sign));
            }
        }
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|o| o.sign == e.sign) {
                return invalid(format!("{} listed twice", e.sign));
            }
        }
        Ok(Self {
            version,
            entries,
            fallback,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn entries(&self) -> &[SaturnTransitEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> Rashi {
        self.fallback
    }

    /// Same entries with a different fallback sign.
    pub fn with_fallback(mut self, fallback: Rashi) -> Self {
        self.fallback = fallback;
        self
    }

    /// First month covered.
    pub fn valid_from(&self) -> MonthYear {
        self.entries.first().map_or(UNSET_MONTH, |e| e.start)
    }

    /// Last month covered; the table's `end` is exclusive.
    pub fn valid_through(&self) -> MonthYear {
        self.entries
            .last()
            .map_or(UNSET_MONTH, |e| e.end.previous())
    }

    /// Entry for `sign`, if the table lists it.
    pub fn entry_for(&self, sign: Rashi) -> Option<&SaturnTransitEntry> {
        self.entries.iter().find(|e| e.sign == sign)
    }

    fn stale_warning(&self) -> VedicWarning {
        VedicWarning::StaleTable {
            table: self.version.clone(),
            valid_through: self.valid_through(),
        }
    }
}

impl Default for SaturnTransitTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Saturn's sign at some month, and whether the table actually covered it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaturnSign {
    pub sign: Rashi,
    pub in_table: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<VedicWarning>,
}

/// Saturn's sign at `at`, falling back to the table's default sign with a
/// `StaleTable` warning when no entry covers it.
pub fn saturn_sign_at(table: &SaturnTransitTable, at: MonthYear) -> SaturnSign {
    match table.entries.iter().find(|e| e.contains(at)) {
        Some(e) => SaturnSign {
            sign: e.sign,
            in_table: true,
            warning: None,
        },
        None => {
            warn!(
                at = %at,
                valid_through = %table.valid_through(),
                "Saturn transit table does not cover this month, using fallback"
            );
            SaturnSign {
                sign: table.fallback,
                in_table: false,
                warning: Some(table.stale_warning()),
            }
        }
    }
}

/// A phase of Sade Sati, by Saturn's sign counted from the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
}

pub const ALL_SADE_SATI_PHASES: [SadeSatiPhase; 3] = [
    SadeSatiPhase::Twelfth,
    SadeSatiPhase::First,
    SadeSatiPhase::Second,
];

impl SadeSatiPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twelfth => "12th",
            Self::First => "1st",
            Self::Second => "2nd",
        }
    }

    /// Sign Saturn occupies during this phase for a given Moon sign.
    pub const fn sign_for(self, moon: Rashi) -> Rashi {
        match self {
            Self::Twelfth => moon.nth_from(12),
            Self::First => moon,
            Self::Second => moon.nth_from(2),
        }
    }
}

impl Display for SadeSatiPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The 12th, 1st and 2nd signs from the Moon.
pub const fn sade_sati_signs(moon: Rashi) -> [Rashi; 3] {
    [moon.nth_from(12), moon, moon.nth_from(2)]
}

/// Phase active when Saturn is in `saturn`, if any.
pub fn sade_sati_phase(moon: Rashi, saturn: Rashi) -> Option<SadeSatiPhase> {
    ALL_SADE_SATI_PHASES
        .into_iter()
        .find(|p| p.sign_for(moon) == saturn)
}

/// One phase of one Sade Sati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiWindow {
    pub moon_sign: Rashi,
    pub phase: SadeSatiPhase,
    pub start: MonthYear,
    pub end: MonthYear,
}

/// Start and end of a whole Sade Sati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SadeSatiSpan {
    pub start: MonthYear,
    pub end: MonthYear,
}

/// Full Sade Sati picture for a Moon sign at some instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiReport {
    pub moon_sign: Rashi,
    pub at: MonthYear,
    pub saturn: SaturnSign,
    pub in_sade_sati: bool,
    pub active_phase: Option<SadeSatiPhase>,
    /// The three phases of the Sade Sati nearest the table, in order.
    /// Empty when the table lacks any of the three signs.
    pub phases: Vec<SadeSatiWindow>,
    /// From the 12th-sign start to the 2nd-sign end.
    pub current: Option<SadeSatiSpan>,
    /// One Saturn cycle earlier.
    pub past: Option<SadeSatiSpan>,
    /// One Saturn cycle later.
    pub future: Option<SadeSatiSpan>,
    pub warnings: Vec<VedicWarning>,
}

/// The three phase occupancies of one Sade Sati, anchored on the 2nd-sign
/// entry. A 12th- or 1st-sign entry that starts after the 2nd-sign entry
/// ends belongs to the next cycle and is taken one cycle earlier.
pub fn sade_sati_windows(table: &SaturnTransitTable, moon: Rashi) -> Option<[SadeSatiWindow; 3]> {
    let [s12, s1, s2] = sade_sati_signs(moon);
    let second = *table.entry_for(s2)?;
    let align = |e: SaturnTransitEntry| {
        if e.start > second.end {
            e.shifted(-1)
        } else {
            e
        }
    };
    let twelfth = align(*table.entry_for(s12)?);
    let first = align(*table.entry_for(s1)?);
    let window = |phase, e: SaturnTransitEntry| SadeSatiWindow {
        moon_sign: moon,
        phase,
        start: e.start,
        end: e.end,
    };
    Some([
        window(SadeSatiPhase::Twelfth, twelfth),
        window(SadeSatiPhase::First, first),
        window(SadeSatiPhase::Second, second),
    ])
}

fn span_of(windows: &[SadeSatiWindow; 3], cycles: i32) -> SadeSatiSpan {
    let years = (cycles as f64 * SATURN_CYCLE_YEARS).round() as i32;
    SadeSatiSpan {
        start: windows[0].start.shift_years(years),
        end: windows[2].end.shift_years(years),
    }
}

/// Sade Sati status and windows for `moon` at the month of `now`.
pub fn sade_sati(table: &SaturnTransitTable, moon: Rashi, now: &CivilDateTime) -> SadeSatiReport {
    sade_sati_at(table, moon, MonthYear::from(now))
}

/// Sade Sati status and windows for `moon` at month `at`.
pub fn sade_sati_at(table: &SaturnTransitTable, moon: Rashi, at: MonthYear) -> SadeSatiReport {
    let saturn = saturn_sign_at(table, at);
    let active_phase = sade_sati_phase(moon, saturn.sign);
    let windows = sade_sati_windows(table, moon);
    let warnings = saturn.warning.iter().cloned().collect();
    SadeSatiReport {
        moon_sign: moon,
        at,
        in_sade_sati: active_phase.is_some(),
        active_phase,
        phases: windows.map(|w| w.to_vec()).unwrap_or_default(),
        current: windows.as_ref().map(|w| span_of(w, 0)),
        past: windows.as_ref().map(|w| span_of(w, -1)),
        future: windows.as_ref().map(|w| span_of(w, 1)),
        saturn,
        warnings,
    }
}
