//! Sensitive points derived from planetary longitudes.
//!
//! - Bhrigu Bindu: midpoint of the arc from Rahu forward to the Moon.
//! - Gulika and Mandi: supplied by an upstream source; when only Gulika is
//!   known, Mandi takes its longitude and is flagged as defaulted.

use serde::Serialize;

use crate::chart::BirthChart;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::house::{house_from_cusps, whole_sign_house};
use crate::log::debug;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{arc_forward, normalize_360};

/// How houses are assigned to special points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HouseBasis<'a> {
    /// Houses from 12 cusp longitudes.
    Cusps(&'a [f64]),
    /// Whole-sign houses counted from the ascendant sign.
    WholeSign(Rashi),
}

impl<'a> HouseBasis<'a> {
    /// Cusps when given, whole-sign from `ascendant` otherwise.
    pub fn from_optional(cusps: Option<&'a [f64]>, ascendant: Rashi) -> Self {
        match cusps {
            Some(c) => Self::Cusps(c),
            None => Self::WholeSign(ascendant),
        }
    }

    fn house_of(&self, longitude: f64, rashi: Rashi) -> Result<u8, VedicError> {
        match self {
            Self::Cusps(cusps) => house_from_cusps(longitude, cusps),
            Self::WholeSign(asc) => Ok(whole_sign_house(rashi, *asc)),
        }
    }
}

/// A computed point with its sign and house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPoint {
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign number.
    pub sign: u8,
    pub degree_in_sign: f64,
    pub house: u8,
}

impl SpecialPoint {
    pub fn at(longitude: f64, basis: HouseBasis<'_>) -> Result<Self, VedicError> {
        if !longitude.is_finite() {
            return Err(VedicError::NonFinite("special point longitude"));
        }
        let lon = normalize_360(longitude);
        let info = rashi_from_longitude(lon);
        Ok(Self {
            longitude: lon,
            rashi: info.rashi,
            sign: info.sign,
            degree_in_sign: info.degree_in_sign,
            house: basis.house_of(lon, info.rashi)?,
        })
    }
}

/// Bhrigu Bindu longitude: Rahu plus half the forward arc to the Moon.
pub fn bhrigu_bindu(rahu: f64, moon: f64) -> f64 {
    normalize_360(rahu + arc_forward(rahu, moon) / 2.0)
}

/// Bhrigu Bindu of a chart.
pub fn bhrigu_bindu_point(
    chart: &BirthChart,
    basis: HouseBasis<'_>,
) -> Result<SpecialPoint, VedicError> {
    let rahu = chart.position(Graha::Rahu).longitude;
    let moon = chart.moon().longitude;
    let lon = bhrigu_bindu(rahu, moon);
    debug!(rahu, moon, bhrigu_bindu = lon, "bhrigu bindu");
    SpecialPoint::at(lon, basis)
}

/// Gulika and Mandi placed in signs and houses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GulikaMandi {
    pub gulika: SpecialPoint,
    pub mandi: SpecialPoint,
    /// Mandi was absent upstream and copied from Gulika.
    pub mandi_defaulted: bool,
}

/// Mandi longitude, defaulting to Gulika's. The flag reports the default.
pub fn resolve_gulika_mandi(gulika: f64, mandi: Option<f64>) -> (f64, f64, bool) {
    match mandi {
        Some(m) => (gulika, m, false),
        None => (gulika, gulika, true),
    }
}

/// Place upstream Gulika/Mandi longitudes.
pub fn gulika_mandi_points(
    gulika: f64,
    mandi: Option<f64>,
    basis: HouseBasis<'_>,
) -> Result<GulikaMandi, VedicError> {
    let (g, m, mandi_defaulted) = resolve_gulika_mandi(gulika, mandi);
    if mandi_defaulted {
        debug!(gulika = g, "mandi absent, using gulika longitude");
    }
    Ok(GulikaMandi {
        gulika: SpecialPoint::at(g, basis)?,
        mandi: SpecialPoint::at(m, basis)?,
        mandi_defaulted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house::equal_house_cusps;

    #[test]
    fn bindu_simple_midpoint() {
        assert!((bhrigu_bindu(10.0, 50.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn bindu_wraps_when_moon_behind_rahu() {
        // Moon 20 + 360 = 380; (300 + 380) / 2 = 340
        assert!((bhrigu_bindu(300.0, 20.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn bindu_coincident() {
        assert!((bhrigu_bindu(123.0, 123.0) - 123.0).abs() < 1e-12);
    }

    #[test]
    fn whole_sign_point() {
        let p = SpecialPoint::at(95.0, HouseBasis::WholeSign(Rashi::Mesha)).unwrap();
        assert_eq!(p.rashi, Rashi::Karka);
        assert_eq!(p.sign, 4);
        assert_eq!(p.house, 4);
        assert!((p.degree_in_sign - 5.0).abs() < 1e-12);
    }

    #[test]
    fn cusp_point() {
        let cusps = equal_house_cusps(15.0);
        let p = SpecialPoint::at(14.0, HouseBasis::Cusps(&cusps)).unwrap();
        assert_eq!(p.house, 12);
    }

    #[test]
    fn bad_cusps_propagate() {
        let cusps = [0.0; 5];
        assert!(matches!(
            SpecialPoint::at(10.0, HouseBasis::Cusps(&cusps)),
            Err(VedicError::Configuration(_))
        ));
    }

    #[test]
    fn nan_longitude_rejected() {
        assert!(matches!(
            SpecialPoint::at(f64::NAN, HouseBasis::WholeSign(Rashi::Mesha)),
            Err(VedicError::NonFinite(_))
        ));
    }

    #[test]
    fn mandi_defaults_to_gulika() {
        let gm = gulika_mandi_points(200.0, None, HouseBasis::WholeSign(Rashi::Tula)).unwrap();
        assert!(gm.mandi_defaulted);
        assert_eq!(gm.mandi, gm.gulika);
        assert_eq!(gm.gulika.house, 1);

        let gm =
            gulika_mandi_points(200.0, Some(215.0), HouseBasis::WholeSign(Rashi::Tula)).unwrap();
        assert!(!gm.mandi_defaulted);
        assert_eq!(gm.mandi.rashi, Rashi::Vrischika);
    }
}
