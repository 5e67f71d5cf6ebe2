//! Planet data source seam.
//!
//! Ephemeris services, HTTP APIs and fixtures all reduce to "birth record
//! in, raw longitudes out". Retries and caching are the caller's concern.

use std::convert::Infallible;

use serde::Serialize;

use crate::chart::{BirthRecord, RawPosition};
use crate::error::VedicError;
use crate::transit::approximate_raw_positions;

/// How much a set of positions can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fidelity {
    /// From a real ephemeris.
    Ephemeris,
    /// From mean motion; off by up to several degrees.
    Approximate,
}

/// Anything that can produce raw planet longitudes for a birth record.
pub trait PlanetSource {
    type Error;

    fn fetch_planet_positions(&self, record: &BirthRecord)
    -> Result<Vec<RawPosition>, Self::Error>;

    fn fidelity(&self) -> Fidelity;
}

/// Mean-motion fallback source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionSource;

impl PlanetSource for MeanMotionSource {
    type Error = VedicError;

    fn fetch_planet_positions(
        &self,
        record: &BirthRecord,
    ) -> Result<Vec<RawPosition>, Self::Error> {
        let jd = record.to_civil()?.to_jd_utc();
        Ok(approximate_raw_positions(jd))
    }

    fn fidelity(&self) -> Fidelity {
        Fidelity::Approximate
    }
}

/// Fixed positions, e.g. from a stored chart or a test fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub positions: Vec<RawPosition>,
    pub fidelity: Option<Fidelity>,
}

impl PlanetSource for StaticSource {
    type Error = Infallible;

    fn fetch_planet_positions(&self, _: &BirthRecord) -> Result<Vec<RawPosition>, Self::Error> {
        Ok(self.positions.clone())
    }

    fn fidelity(&self) -> Fidelity {
        self.fidelity.unwrap_or(Fidelity::Ephemeris)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    fn record() -> BirthRecord {
        BirthRecord {
            date: "2000-01-01".into(),
            time: "12:00".into(),
            latitude: 0.0,
            longitude: 0.0,
            timezone_offset_hours: 0.0,
        }
    }

    #[test]
    fn mean_motion_source_at_j2000() {
        let src = MeanMotionSource;
        let pos = src.fetch_planet_positions(&record()).unwrap();
        assert_eq!(pos.len(), 9);
        let sun = pos.iter().find(|p| p.graha == Graha::Surya).unwrap();
        assert!((sun.longitude - 280.4665).abs() < 1e-9);
        assert_eq!(src.fidelity(), Fidelity::Approximate);
    }

    #[test]
    fn mean_motion_source_rejects_bad_date() {
        let mut rec = record();
        rec.date = "2000-02-30".into();
        assert!(matches!(
            MeanMotionSource.fetch_planet_positions(&rec),
            Err(VedicError::Time(_))
        ));
    }

    #[test]
    fn static_source_passthrough() {
        let src = StaticSource {
            positions: vec![RawPosition::new(Graha::Chandra, 12.0, false)],
            fidelity: None,
        };
        assert_eq!(src.fetch_planet_positions(&record()).unwrap().len(), 1);
        assert_eq!(src.fidelity(), Fidelity::Ephemeris);
    }
}
