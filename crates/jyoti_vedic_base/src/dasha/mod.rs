//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle runs through nine graha periods in a
//! fixed order. The first period is ruled by the lord of the Moon's
//! nakshatra. Each Mahadasha divides into nine Antardashas, and each
//! Antardasha into nine Pratyantardashas, proportionally to the full
//! cycle lengths and starting from the parent's own lord.
//!
//! Periods are measured in years of 365.25 days, as offsets from birth.

pub mod balance;
pub mod subperiod;
pub mod timeline;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use subperiod::{cyclic_sequence, proportional_children, snap_last_child_end};
pub use timeline::{
    CurrentDasha, DashaNode, MAX_ELAPSED_YEARS, current_dasha, current_dasha_at,
    current_dasha_from_longitude, vimshottari_timeline,
};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, next_lord, vimshottari_years,
};
