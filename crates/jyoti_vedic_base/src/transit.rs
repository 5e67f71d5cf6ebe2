//! Mean-motion transit approximation.
//!
//! Each graha moves at a constant daily rate from its J2000.0 longitude.
//! This is good to a few degrees for the slow planets over decades and
//! much worse for Mercury and Venus; results carry
//! [`Fidelity::Approximate`]. Mean motion has no stations, so only the
//! nodes are ever flagged retrograde.

use jyoti_time::{CivilDateTime, J2000_JD};
use serde::Serialize;

use crate::chart::{PlanetPosition, RawPosition};
use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::Rashi;
use crate::source::Fidelity;
use crate::util::normalize_360;

/// Mean longitude at J2000.0 and mean daily motion, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanMotion {
    pub base_deg: f64,
    pub deg_per_day: f64,
}

/// Mean motion elements. Ketu is not listed: it is Rahu + 180.
pub const fn mean_motion(graha: Graha) -> MeanMotion {
    let (base_deg, deg_per_day) = match graha {
        Graha::Surya => (280.4665, 0.9856),
        Graha::Chandra => (218.3162, 13.1764),
        Graha::Mangal => (355.4333, 0.5240),
        Graha::Buddh => (252.2509, 4.0923),
        Graha::Guru => (34.3515, 0.0831),
        Graha::Shukra => (181.9798, 1.6021),
        Graha::Shani => (49.5581, 0.0335),
        // The mean node regresses.
        Graha::Rahu | Graha::Ketu => (95.9967, -0.0529),
    };
    MeanMotion {
        base_deg,
        deg_per_day,
    }
}

/// Approximate longitude of `graha` at a UTC Julian Date.
pub fn approximate_longitude(graha: Graha, jd_utc: f64) -> f64 {
    let mm = mean_motion(graha);
    let lon = mm.base_deg + mm.deg_per_day * (jd_utc - J2000_JD);
    match graha {
        Graha::Ketu => normalize_360(lon + 180.0),
        _ => normalize_360(lon),
    }
}

/// Raw approximate positions for all nine grahas.
pub fn approximate_raw_positions(jd_utc: f64) -> Vec<RawPosition> {
    ALL_GRAHAS
        .iter()
        .map(|&g| RawPosition::new(g, approximate_longitude(g, jd_utc), g.is_node()))
        .collect()
}

/// Whole-hour or half-hour offset implied by a geographic longitude.
///
/// Fallback for callers with coordinates but no timezone data.
pub fn approximate_tz_offset(longitude_deg: f64) -> f64 {
    (longitude_deg / 15.0 * 2.0).round() / 2.0
}

/// Transit positions relative to a reference sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateTransits {
    pub instant: CivilDateTime,
    pub jd_utc: f64,
    pub reference_sign: Rashi,
    /// Indexed by [`Graha::index`].
    pub positions: Vec<PlanetPosition>,
    pub fidelity: Fidelity,
}

/// Approximate all nine grahas at `instant`, with houses counted from
/// `reference` (typically the natal Moon sign).
pub fn approximate_transits(instant: &CivilDateTime, reference: Rashi) -> ApproximateTransits {
    let jd_utc = instant.to_jd_utc();
    let positions = approximate_raw_positions(jd_utc)
        .into_iter()
        .map(|raw| PlanetPosition::place(raw, reference))
        .collect();
    ApproximateTransits {
        instant: *instant,
        jd_utc,
        reference_sign: reference,
        positions,
        fidelity: Fidelity::Approximate,
    }
}
