//! Locating the active dasha and building full timelines.

use jyoti_time::CivilDateTime;
use serde::Serialize;

use crate::classification::resolve_nakshatra;
use crate::error::{VedicError, VedicWarning};
use crate::graha::Graha;
use crate::log::debug;

use super::balance::{BirthBalance, nakshatra_birth_balance};
use super::subperiod::{mahadasha, proportional_children};
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, offset_instant};
use super::vimshottari::{VIMSHOTTARI_TOTAL_YEARS, next_lord, vimshottari_years};

/// The periods active at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDasha {
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
    pub pratyantardasha: DashaPeriod,
    /// Years from birth to "now".
    pub elapsed_years: f64,
    /// Years left in the active Antardasha.
    pub antardasha_remaining_years: f64,
    pub antardasha_ends_at: CivilDateTime,
    /// False when the Moon nakshatra was not recognised and Ketu was used.
    pub resolved: bool,
    pub warnings: Vec<VedicWarning>,
}

/// Elapsed spans beyond this are rejected rather than walked.
pub const MAX_ELAPSED_YEARS: f64 = 10.0 * VIMSHOTTARI_TOTAL_YEARS;

/// Active Mahadasha, Antardasha and Pratyantardasha at `elapsed_years`
/// after birth.
///
/// `start` rules the first Mahadasha; `consumed_at_birth` is how much of
/// that Mahadasha had already run at birth (0 when birth is taken as the
/// start of the period). Elapsed time is consumed lord by lord through
/// the cycle, wrapping past 120 years. Boundaries are half-open, so an
/// instant exactly at a period's end belongs to the next period.
pub fn current_dasha_at(
    start: Graha,
    consumed_at_birth: f64,
    elapsed_years: f64,
) -> Result<[DashaPeriod; 3], VedicError> {
    if !elapsed_years.is_finite() || !consumed_at_birth.is_finite() {
        return Err(VedicError::NonFinite("elapsed years"));
    }
    if elapsed_years < 0.0 {
        return Err(VedicError::Configuration(format!(
            "birth is {:.3} years after the query instant",
            -elapsed_years
        )));
    }
    if elapsed_years > MAX_ELAPSED_YEARS {
        return Err(VedicError::Configuration(format!(
            "{elapsed_years:.3} years since birth exceeds {MAX_ELAPSED_YEARS} years"
        )));
    }

    let mut lord = start;
    let mut period_start = -consumed_at_birth;
    loop {
        let end = period_start + vimshottari_years(lord);
        if elapsed_years < end {
            break;
        }
        period_start = end;
        lord = next_lord(lord);
    }

    let maha = mahadasha(lord, period_start);
    let local = (elapsed_years - maha.start_offset_years).max(0.0);
    let (antar, local) = active_child(&maha, local);
    let (pratyantar, _) = active_child(&antar, local);
    Ok([maha, antar, pratyantar])
}

/// Child of `parent` containing `local_offset` (years since the parent's
/// start), with the offset re-measured from that child's start.
///
/// An offset rounded onto or past the parent's end lands in the last child.
fn active_child(parent: &DashaPeriod, local_offset: f64) -> (DashaPeriod, f64) {
    let children = proportional_children(parent);
    let mut cursor = 0.0;
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        if local_offset < cursor + child.duration_years || is_last {
            return (*child, (local_offset - cursor).max(0.0));
        }
        cursor += child.duration_years;
    }
    (*parent, local_offset)
}

fn build_current(
    start: Graha,
    consumed_at_birth: f64,
    birth: &CivilDateTime,
    now: &CivilDateTime,
    resolved: bool,
    warnings: Vec<VedicWarning>,
) -> Result<CurrentDasha, VedicError> {
    let elapsed_years = (now.to_jd_utc() - birth.to_jd_utc()) / DAYS_PER_YEAR;
    let [mahadasha, antardasha, pratyantardasha] =
        current_dasha_at(start, consumed_at_birth, elapsed_years)?;
    let remaining = (antardasha.end_offset_years() - elapsed_years).max(0.0);
    debug!(
        maha = mahadasha.graha.english_name(),
        antar = antardasha.graha.english_name(),
        elapsed_years,
        "current dasha"
    );
    Ok(CurrentDasha {
        mahadasha,
        antardasha,
        pratyantardasha,
        elapsed_years,
        antardasha_remaining_years: remaining,
        antardasha_ends_at: offset_instant(now, remaining),
        resolved,
        warnings,
    })
}

/// Current dasha from the Moon's nakshatra name, taking birth as the
/// start of the nakshatra lord's Mahadasha.
///
/// An unknown nakshatra falls back to Ketu and is reported in `warnings`.
pub fn current_dasha(
    moon_nakshatra: &str,
    birth: &CivilDateTime,
    now: &CivilDateTime,
) -> Result<CurrentDasha, VedicError> {
    let profile = resolve_nakshatra(moon_nakshatra);
    let mut warnings = Vec::new();
    if !profile.resolved {
        warnings.push(VedicWarning::UnresolvedLookup {
            table: "nakshatra",
            input: moon_nakshatra.to_string(),
        });
    }
    build_current(
        profile.dasha_lord,
        0.0,
        birth,
        now,
        profile.resolved,
        warnings,
    )
}

/// Current dasha from the Moon's sidereal longitude, with birth balance.
pub fn current_dasha_from_longitude(
    moon_lon: f64,
    birth: &CivilDateTime,
    now: &CivilDateTime,
) -> Result<CurrentDasha, VedicError> {
    if !moon_lon.is_finite() {
        return Err(VedicError::NonFinite("moon longitude"));
    }
    let balance = nakshatra_birth_balance(moon_lon);
    build_current(
        balance.lord,
        balance.elapsed_years,
        birth,
        now,
        true,
        Vec::new(),
    )
}

/// A period with its sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaNode {
    #[serde(flatten)]
    pub period: DashaPeriod,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaNode>,
}

fn expand(period: DashaPeriod, depth: DashaLevel) -> DashaNode {
    let children = if period.level < depth {
        proportional_children(&period)
            .into_iter()
            .map(|c| expand(c, depth))
            .collect()
    } else {
        Vec::new()
    };
    DashaNode { period, children }
}

/// One full 120-year cycle of Mahadashas from birth, expanded down to
/// `depth`.
///
/// The first Mahadasha starts before birth by the part already consumed,
/// so its `start_offset_years` is `-balance.elapsed_years`.
pub fn vimshottari_timeline(balance: &BirthBalance, depth: DashaLevel) -> Vec<DashaNode> {
    let mut lord = balance.lord;
    let mut start = -balance.elapsed_years;
    let mut nodes = Vec::with_capacity(9);
    for _ in 0..9 {
        let maha = mahadasha(lord, start);
        start = maha.end_offset_years();
        nodes.push(expand(maha, depth));
        lord = next_lord(lord);
    }
    nodes
}
