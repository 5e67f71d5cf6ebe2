//! Birth balance: how much of the first Mahadasha remains at birth.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::vimshottari::vimshottari_years;

/// Position in the Vimshottari cycle at the moment of birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    #[serde(rename = "startPlanet")]
    pub lord: Graha,
    /// Fraction of the nakshatra the Moon has already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the first Mahadasha already spent before birth.
    pub elapsed_years: f64,
    /// Years of the first Mahadasha remaining after birth.
    pub balance_years: f64,
}

impl BirthBalance {
    /// Balance for a birth exactly at the start of `nakshatra`.
    pub const fn at_start(nakshatra: Nakshatra) -> Self {
        let lord = nakshatra.dasha_lord();
        Self {
            nakshatra,
            lord,
            elapsed_fraction: 0.0,
            elapsed_years: 0.0,
            balance_years: vimshottari_years(lord),
        }
    }
}

/// Birth balance from the Moon's sidereal longitude.
///
/// `balance = years(lord) * (1 - fraction of nakshatra traversed)`.
pub fn nakshatra_birth_balance(moon_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_lon);
    let lord = info.nakshatra.dasha_lord();
    let years = vimshottari_years(lord);
    let elapsed_years = years * info.fraction_elapsed;
    BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        elapsed_fraction: info.fraction_elapsed,
        elapsed_years,
        balance_years: years - elapsed_years,
    }
}
