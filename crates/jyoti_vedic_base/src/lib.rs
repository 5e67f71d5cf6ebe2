//! Vedic astrology calculations on raw planetary longitudes.
//!
//! This crate provides:
//! - Sign, degree and house mapping (whole-sign or from 12 cusps)
//! - Nakshatra and pada resolution, with Gana/Yoni/Nadi/Dasha-lord tables
//! - Ashtakoot (36-point) compatibility scoring
//! - Vimshottari Mahadasha/Antardasha/Pratyantardasha periods
//! - Mean-motion transit longitudes from J2000
//! - Saturn transit table lookup and Sade Sati windows
//! - Bhrigu Bindu and Gulika/Mandi placement
//!
//! Everything is a pure function of its inputs. Longitudes are sidereal
//! decimal degrees; precise positions come from a [`PlanetSource`].

pub mod ashtakoot;
pub mod chart;
pub mod classification;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod house;
pub mod log;
pub mod nakshatra;
pub mod rashi;
pub mod sade_sati;
pub mod source;
pub mod sphuta;
pub mod transit;
pub mod util;

pub use ashtakoot::{
    ACCEPTABLE_THRESHOLD, ALL_KOOTAS, ASHTAKOOT_MAX, CompatibilityScore, Koota, KootaResult,
    KootaStatus, MoonProfile, Rating, ashtakoot_from_charts, ashtakoot_score,
};
pub use chart::{BirthChart, BirthRecord, PlanetPosition, RawPosition};
pub use classification::{
    DASHA_LORD_CYCLE, Element, Gana, NakshatraProfile, Nadi, Varna, Yoni, resolve_nakshatra,
};
pub use dasha::{
    BirthBalance, CurrentDasha, DashaLevel, DashaNode, DashaPeriod, current_dasha,
    current_dasha_from_longitude, nakshatra_birth_balance, vimshottari_timeline,
};
pub use error::{VedicError, VedicWarning};
pub use graha::{ALL_GRAHAS, Graha};
pub use house::{
    HOUSE_COUNT, SignPlacement, equal_house_cusps, house_from_cusps, sign_house,
    whole_sign_house,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
    rashi_to_longitude,
};
pub use sade_sati::{
    SATURN_CYCLE_YEARS, SadeSatiPhase, SadeSatiReport, SadeSatiSpan, SadeSatiWindow,
    SaturnSign, SaturnTransitEntry, SaturnTransitTable, sade_sati, sade_sati_at,
    sade_sati_signs, saturn_sign_at,
};
pub use source::{Fidelity, MeanMotionSource, PlanetSource, StaticSource};
pub use sphuta::{
    GulikaMandi, HouseBasis, SpecialPoint, bhrigu_bindu, bhrigu_bindu_point,
    gulika_mandi_points,
};
pub use transit::{
    ApproximateTransits, approximate_longitude, approximate_raw_positions,
    approximate_transits, approximate_tz_offset,
};
pub use util::normalize_360;
