//! Chart model: planet positions, birth charts and birth records.

use jyoti_time::{CivilDateTime, TimeError};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::house::whole_sign_house;
use crate::log::{debug, warn};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Largest disagreement tolerated between a supplied Ketu and Rahu + 180.
const KETU_TOLERANCE_DEG: f64 = 1e-6;

/// A planet longitude as delivered by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    #[serde(rename = "planet")]
    pub graha: Graha,
    /// Sidereal longitude in degrees (any real).
    pub longitude: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl RawPosition {
    pub const fn new(graha: Graha, longitude: f64, retrograde: bool) -> Self {
        Self {
            graha,
            longitude,
            retrograde,
        }
    }
}

/// A planet placed in sign, house and nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    #[serde(rename = "planet")]
    pub graha: Graha,
    /// Longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// `floor(longitude / 30) + 1`.
    pub sign: u8,
    pub degree_in_sign: f64,
    /// Whole-sign house from the chart's reference sign.
    pub house: u8,
    pub nakshatra: Option<Nakshatra>,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Place a raw longitude relative to `reference` (house 1).
    pub fn place(raw: RawPosition, reference: Rashi) -> Self {
        let lon = normalize_360(raw.longitude);
        let info = rashi_from_longitude(lon);
        Self {
            graha: raw.graha,
            longitude: lon,
            rashi: info.rashi,
            sign: info.sign,
            degree_in_sign: info.degree_in_sign,
            house: whole_sign_house(info.rashi, reference),
            nakshatra: Some(nakshatra_from_longitude(lon).nakshatra),
            retrograde: raw.retrograde && raw.graha != Graha::Chandra,
        }
    }
}

/// Nine placed planets plus the ascendant sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub ascendant_sign: Rashi,
    /// Indexed by [`Graha::index`].
    pub positions: [PlanetPosition; 9],
}

impl BirthChart {
    /// Build a chart from raw longitudes.
    ///
    /// Every graha except Ketu must be present. Ketu is always recomputed
    /// as Rahu + 180 with Rahu's retrograde flag; a supplied Ketu that
    /// disagrees is logged and replaced.
    pub fn from_raw(ascendant_sign: Rashi, raw: &[RawPosition]) -> Result<Self, VedicError> {
        let mut slots: [Option<RawPosition>; 9] = [None; 9];
        for r in raw {
            if !r.longitude.is_finite() {
                return Err(VedicError::NonFinite("planet longitude"));
            }
            slots[r.graha.index() as usize] = Some(*r);
        }

        let rahu = slots[Graha::Rahu.index() as usize].ok_or_else(|| missing(Graha::Rahu))?;
        let ketu_lon = normalize_360(rahu.longitude + 180.0);
        if let Some(given) = slots[Graha::Ketu.index() as usize] {
            let diff = normalize_360(given.longitude - ketu_lon);
            if diff > KETU_TOLERANCE_DEG && diff < 360.0 - KETU_TOLERANCE_DEG {
                warn!(
                    given = given.longitude,
                    derived = ketu_lon,
                    "supplied Ketu disagrees with Rahu + 180, overwriting"
                );
            }
        }
        slots[Graha::Ketu.index() as usize] =
            Some(RawPosition::new(Graha::Ketu, ketu_lon, rahu.retrograde));

        let mut positions = [PlanetPosition::place(rahu, ascendant_sign); 9];
        for g in ALL_GRAHAS {
            let r = slots[g.index() as usize].ok_or_else(|| missing(g))?;
            positions[g.index() as usize] = PlanetPosition::place(r, ascendant_sign);
        }
        debug!(ascendant = ascendant_sign.western_name(), "chart built");
        Ok(Self {
            ascendant_sign,
            positions,
        })
    }

    /// Build a chart whose ascendant is given as a longitude.
    pub fn from_longitudes(ascendant_lon: f64, raw: &[RawPosition]) -> Result<Self, VedicError> {
        if !ascendant_lon.is_finite() {
            return Err(VedicError::NonFinite("ascendant longitude"));
        }
        Self::from_raw(rashi_from_longitude(ascendant_lon).rashi, raw)
    }

    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        &self.positions[graha.index() as usize]
    }

    pub fn moon(&self) -> &PlanetPosition {
        self.position(Graha::Chandra)
    }
}

fn missing(g: Graha) -> VedicError {
    VedicError::Configuration(format!("chart is missing {}", g.english_name()))
}

/// Birth data at the engine boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`, local time.
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Hours east of UTC.
    pub timezone_offset_hours: f64,
}

impl BirthRecord {
    /// Parse the local birth instant.
    pub fn to_civil(&self) -> Result<CivilDateTime, TimeError> {
        CivilDateTime::parse(&self.date, &self.time, self.timezone_offset_hours)
    }
}
