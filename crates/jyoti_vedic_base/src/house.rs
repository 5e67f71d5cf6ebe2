//! House placement: whole-sign houses from a reference sign, or houses
//! from 12 explicit cusp longitudes.

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Number of houses (and cusps).
pub const HOUSE_COUNT: usize = 12;

/// Sign, degree and house of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPlacement {
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign number.
    pub sign: u8,
    pub degree_in_sign: f64,
    /// 1-based house counted from the reference sign.
    pub house: u8,
}

/// Whole-sign house of `sign` counted from `reference` (reference = house 1).
pub const fn whole_sign_house(sign: Rashi, reference: Rashi) -> u8 {
    ((sign.index() + 12 - reference.index()) % 12) + 1
}

/// Map a longitude to its sign and its whole-sign house from `reference`.
pub fn sign_house(longitude: f64, reference: Rashi) -> SignPlacement {
    let info = rashi_from_longitude(longitude);
    SignPlacement {
        longitude: normalize_360(longitude),
        rashi: info.rashi,
        sign: info.sign,
        degree_in_sign: info.degree_in_sign,
        house: whole_sign_house(info.rashi, reference),
    }
}

/// 12 equal 30-degree cusps starting at `start_deg`.
pub fn equal_house_cusps(start_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(start_deg + i as f64 * RASHI_SPAN);
    }
    cusps
}

/// House (1..=12) containing `longitude`, given cusps for houses 1..=12.
///
/// House `i` spans `[cusp[i], cusp[i+1])`. A span whose start is greater
/// than its end wraps through 0 degrees. A zero-width span claims only its
/// exact cusp longitude.
///
/// Returns `VedicError::Configuration` when the slice does not hold exactly
/// 12 finite cusps, or when no span contains the longitude.
pub fn house_from_cusps(longitude: f64, cusps: &[f64]) -> Result<u8, VedicError> {
    if cusps.len() != HOUSE_COUNT {
        return Err(VedicError::Configuration(format!(
            "expected {HOUSE_COUNT} house cusps, got {}",
            cusps.len()
        )));
    }
    if cusps.iter().any(|c| !c.is_finite()) {
        return Err(VedicError::Configuration(
            "house cusps must be finite".to_string(),
        ));
    }
    if !longitude.is_finite() {
        return Err(VedicError::NonFinite("longitude"));
    }

    let lon = normalize_360(longitude);
    for i in 0..HOUSE_COUNT {
        let start = normalize_360(cusps[i]);
        let end = normalize_360(cusps[(i + 1) % HOUSE_COUNT]);
        let inside = if start < end {
            lon >= start && lon < end
        } else if start > end {
            lon >= start || lon < end
        } else {
            lon == start
        };
        if inside {
            return Ok(i as u8 + 1);
        }
    }
    Err(VedicError::Configuration(format!(
        "no house cusp span contains {lon:.4}°"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_sign_from_reference() {
        assert_eq!(whole_sign_house(Rashi::Mesha, Rashi::Mesha), 1);
        assert_eq!(whole_sign_house(Rashi::Meena, Rashi::Mesha), 12);
        assert_eq!(whole_sign_house(Rashi::Mesha, Rashi::Meena), 2);
        assert_eq!(whole_sign_house(Rashi::Kanya, Rashi::Karka), 3);
    }

    #[test]
    fn sign_house_normalizes() {
        let p = sign_house(-5.0, Rashi::Mesha);
        assert_eq!(p.rashi, Rashi::Meena);
        assert_eq!(p.sign, 12);
        assert_eq!(p.house, 12);
        assert!((p.longitude - 355.0).abs() < 1e-10);
        assert!((p.degree_in_sign - 25.0).abs() < 1e-10);
    }

    #[test]
    fn equal_cusps_wrap() {
        let c = equal_house_cusps(345.0);
        assert!((c[0] - 345.0).abs() < 1e-12);
        assert!((c[1] - 15.0).abs() < 1e-12);
        assert!((c[11] - 315.0).abs() < 1e-12);
    }

    #[test]
    fn cusp_house_plain() {
        let c = equal_house_cusps(0.0);
        assert_eq!(house_from_cusps(0.0, &c).unwrap(), 1);
        assert_eq!(house_from_cusps(29.999, &c).unwrap(), 1);
        assert_eq!(house_from_cusps(30.0, &c).unwrap(), 2);
        assert_eq!(house_from_cusps(359.0, &c).unwrap(), 12);
    }

    #[test]
    fn cusp_house_wraps_through_zero() {
        let c = equal_house_cusps(345.0);
        assert_eq!(house_from_cusps(350.0, &c).unwrap(), 1);
        assert_eq!(house_from_cusps(5.0, &c).unwrap(), 1);
        assert_eq!(house_from_cusps(15.0, &c).unwrap(), 2);
        assert_eq!(house_from_cusps(344.0, &c).unwrap(), 12);
    }

    #[test]
    fn wrong_cusp_count_is_error() {
        let err = house_from_cusps(10.0, &[0.0; 11]).unwrap_err();
        assert!(matches!(err, VedicError::Configuration(_)));
        assert!(house_from_cusps(10.0, &[]).is_err());
    }

    #[test]
    fn degenerate_cusps_are_error() {
        let c = [100.0; 12];
        assert_eq!(house_from_cusps(100.0, &c).unwrap(), 1);
        assert!(matches!(
            house_from_cusps(10.0, &c),
            Err(VedicError::Configuration(_))
        ));
    }

    #[test]
    fn non_finite_inputs() {
        let c = equal_house_cusps(0.0);
        assert!(matches!(
            house_from_cusps(f64::NAN, &c),
            Err(VedicError::NonFinite(_))
        ));
        let mut bad = c;
        bad[3] = f64::INFINITY;
        assert!(house_from_cusps(10.0, &bad).is_err());
    }
}
