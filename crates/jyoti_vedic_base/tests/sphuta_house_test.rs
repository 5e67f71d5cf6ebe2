//! Integration tests for Bhrigu Bindu and Gulika/Mandi placement.

use jyoti_vedic_base::{
    ALL_GRAHAS, BirthChart, Graha, HouseBasis, Rashi, RawPosition, VedicError, bhrigu_bindu,
    bhrigu_bindu_point, equal_house_cusps, gulika_mandi_points,
};

fn chart(rahu: f64, moon: f64) -> BirthChart {
    let raw: Vec<RawPosition> = ALL_GRAHAS
        .iter()
        .filter(|g| **g != Graha::Ketu)
        .map(|&g| {
            let lon = match g {
                Graha::Rahu => rahu,
                Graha::Chandra => moon,
                _ => 30.0 * g.index() as f64,
            };
            RawPosition::new(g, lon, g == Graha::Rahu)
        })
        .collect();
    BirthChart::from_raw(Rashi::Simha, &raw).unwrap()
}

#[test]
fn bindu_is_midpoint_of_forward_arc() {
    for (rahu, moon, expected) in [
        (0.0, 90.0, 45.0),
        (90.0, 0.0, 225.0),
        (350.0, 10.0, 0.0),
        (200.0, 100.0, 330.0),
    ] {
        let b = bhrigu_bindu(rahu, moon);
        assert!((b - expected).abs() < 1e-9, "rahu {rahu} moon {moon}: {b}");
    }
}

#[test]
fn bindu_whole_sign_from_ascendant() {
    let c = chart(10.0, 70.0);
    let p = bhrigu_bindu_point(&c, HouseBasis::from_optional(None, c.ascendant_sign)).unwrap();
    assert!((p.longitude - 40.0).abs() < 1e-9);
    assert_eq!(p.rashi, Rashi::Vrishabha);
    // Taurus counted from Leo.
    assert_eq!(p.house, 10);
}

#[test]
fn bindu_house_from_cusps() {
    let c = chart(10.0, 70.0);
    let cusps = equal_house_cusps(35.0);
    let p = bhrigu_bindu_point(&c, HouseBasis::from_optional(Some(&cusps), c.ascendant_sign))
        .unwrap();
    assert_eq!(p.house, 1);
}

#[test]
fn short_cusp_list_is_configuration_error() {
    let c = chart(10.0, 70.0);
    let cusps = [0.0, 30.0, 60.0];
    let err = bhrigu_bindu_point(&c, HouseBasis::Cusps(&cusps)).unwrap_err();
    assert!(matches!(err, VedicError::Configuration(_)), "{err}");
}

#[test]
fn gulika_and_mandi() {
    let basis = HouseBasis::WholeSign(Rashi::Mesha);
    let gm = gulika_mandi_points(305.0, None, basis).unwrap();
    assert!(gm.mandi_defaulted);
    assert_eq!(gm.gulika.rashi, Rashi::Kumbha);
    assert_eq!(gm.gulika.house, 11);
    assert_eq!(gm.mandi.longitude, gm.gulika.longitude);

    let v = serde_json::to_value(gm).unwrap();
    assert_eq!(v["mandiDefaulted"], true);
    assert_eq!(v["gulika"]["sign"], 11);
}
