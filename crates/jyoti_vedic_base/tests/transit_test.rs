//! Integration tests for the mean-motion approximator and data sources.

use jyoti_time::{CivilDateTime, J2000_JD};
use jyoti_vedic_base::util::arc_forward;
use jyoti_vedic_base::{
    ALL_GRAHAS, BirthChart, BirthRecord, Fidelity, Graha, MeanMotionSource, PlanetSource, Rashi,
    RawPosition, StaticSource, approximate_longitude, approximate_raw_positions,
    approximate_transits, approximate_tz_offset,
};

#[test]
fn rahu_ketu_exactly_opposite() {
    let mut jd = J2000_JD - 40_000.0;
    while jd < J2000_JD + 40_000.0 {
        let rahu = approximate_longitude(Graha::Rahu, jd);
        let ketu = approximate_longitude(Graha::Ketu, jd);
        let arc = arc_forward(rahu, ketu);
        assert!((arc - 180.0).abs() < 1e-9, "jd {jd}: arc {arc}");
        jd += 777.7;
    }
}

#[test]
fn longitudes_normalized() {
    for jd in [J2000_JD - 1e5, J2000_JD, J2000_JD + 12_345.6, J2000_JD + 1e5] {
        for g in ALL_GRAHAS {
            let lon = approximate_longitude(g, jd);
            assert!((0.0..360.0).contains(&lon), "{g:?} at {jd}: {lon}");
        }
    }
}

#[test]
fn moon_one_day_motion() {
    let a = approximate_longitude(Graha::Chandra, J2000_JD);
    let b = approximate_longitude(Graha::Chandra, J2000_JD + 1.0);
    assert!((arc_forward(a, b) - 13.1764).abs() < 1e-9);
}

#[test]
fn only_nodes_flagged_retrograde() {
    let raw = approximate_raw_positions(J2000_JD + 5000.0);
    assert_eq!(raw.len(), 9);
    for r in &raw {
        assert_eq!(r.retrograde, r.graha.is_node(), "{:?}", r.graha);
    }
}

#[test]
fn transits_relative_to_reference_sign() {
    let t = CivilDateTime::parse("2025-06-01", "12:00", 5.5).unwrap();
    let tr = approximate_transits(&t, Rashi::Karka);
    assert_eq!(tr.fidelity, Fidelity::Approximate);
    assert_eq!(tr.positions.len(), 9);
    for p in &tr.positions {
        let expected = ((p.rashi.index() + 12 - Rashi::Karka.index()) % 12) + 1;
        assert_eq!(p.house, expected);
        assert_eq!(p.sign, p.rashi.number());
    }
    assert!(!tr.positions[Graha::Chandra.index() as usize].retrograde);
    assert!((tr.jd_utc - t.to_jd_utc()).abs() < 1e-12);
}

#[test]
fn tz_offset_from_longitude() {
    assert!((approximate_tz_offset(82.5) - 5.5).abs() < 1e-12);
    assert!((approximate_tz_offset(77.2) - 5.0).abs() < 1e-12);
    assert!((approximate_tz_offset(-74.0) + 5.0).abs() < 1e-12);
    assert!(approximate_tz_offset(0.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

fn record() -> BirthRecord {
    serde_json::from_str(
        r#"{"date":"1995-08-17","time":"14:45","latitude":28.61,"longitude":77.21,"timezoneOffsetHours":5.5}"#,
    )
    .unwrap()
}

#[test]
fn mean_motion_source_builds_chart() {
    let src = MeanMotionSource;
    let raw = src.fetch_planet_positions(&record()).unwrap();
    assert_eq!(src.fidelity(), Fidelity::Approximate);
    let chart = BirthChart::from_raw(Rashi::Tula, &raw).unwrap();
    let rahu = chart.position(Graha::Rahu).longitude;
    let ketu = chart.position(Graha::Ketu).longitude;
    assert!((arc_forward(rahu, ketu) - 180.0).abs() < 1e-9);
}

#[test]
fn mean_motion_source_rejects_bad_record() {
    let mut rec = record();
    rec.date = "1995-13-40".into();
    assert!(MeanMotionSource.fetch_planet_positions(&rec).is_err());
}

#[test]
fn static_source_passes_through() {
    let positions = vec![RawPosition::new(Graha::Surya, 10.0, false)];
    let src = StaticSource {
        positions: positions.clone(),
        fidelity: None,
    };
    assert_eq!(src.fetch_planet_positions(&record()).unwrap(), positions);
    assert_eq!(src.fidelity(), Fidelity::Ephemeris);
}

#[test]
fn chart_rejects_missing_planet() {
    let raw = [RawPosition::new(Graha::Rahu, 10.0, true)];
    assert!(BirthChart::from_raw(Rashi::Mesha, &raw).is_err());
}

#[test]
fn chart_overwrites_disagreeing_ketu() {
    let mut raw: Vec<RawPosition> = ALL_GRAHAS
        .iter()
        .map(|&g| RawPosition::new(g, 15.0 * g.index() as f64, g.is_node()))
        .collect();
    // Ketu supplied at 120 but Rahu is at 105.
    raw[Graha::Ketu.index() as usize].longitude = 120.0;
    let chart = BirthChart::from_raw(Rashi::Mesha, &raw).unwrap();
    assert!((chart.position(Graha::Ketu).longitude - 285.0).abs() < 1e-9);
    assert!(chart.position(Graha::Ketu).retrograde);
}
