//! Vimshottari cycle data.

use crate::classification::DASHA_LORD_CYCLE;
use crate::graha::Graha;

/// Period lords in cycle order.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = DASHA_LORD_CYCLE;

/// Mahadasha lengths in years, aligned with [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the cycle.
pub const fn cycle_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Mahadasha length of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[cycle_position(graha)]
}

/// The lord following `graha` in the cycle.
pub const fn next_lord(graha: Graha) -> Graha {
    VIMSHOTTARI_GRAHAS[(cycle_position(graha) + 1) % 9]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_120() {
        let sum: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((sum - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn positions_match_table() {
        for (i, g) in VIMSHOTTARI_GRAHAS.iter().enumerate() {
            assert_eq!(cycle_position(*g), i);
        }
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(next_lord(Graha::Buddh), Graha::Ketu);
        assert_eq!(next_lord(Graha::Ketu), Graha::Shukra);
        assert!((vimshottari_years(Graha::Shukra) - 20.0).abs() < 1e-12);
    }
}
