//! Proportional sub-period generation.
//!
//! Child duration = (child lord's full years / 120) * parent duration,
//! walking the cycle from the parent's own lord.

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, cycle_position,
};
use crate::graha::Graha;

/// The nine lords with their full years, starting from `start`.
pub fn cyclic_sequence(start: Graha) -> impl Iterator<Item = (Graha, f64)> {
    let from = cycle_position(start);
    (0..9).map(move |i| {
        let idx = (from + i) % 9;
        (VIMSHOTTARI_GRAHAS[idx], VIMSHOTTARI_YEARS[idx])
    })
}

/// Snap the last child's end to the parent's end to absorb rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent: &DashaPeriod) {
    if let Some(last) = children.last_mut() {
        last.duration_years = parent.end_offset_years() - last.start_offset_years;
    }
}

/// The nine children of `parent`, or none for the deepest level.
pub fn proportional_children(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(level) = parent.level.child_level() else {
        return Vec::new();
    };
    let mut cursor = parent.start_offset_years;
    let mut children: Vec<DashaPeriod> = cyclic_sequence(parent.graha)
        .map(|(graha, years)| {
            let duration_years = years / VIMSHOTTARI_TOTAL_YEARS * parent.duration_years;
            let child = DashaPeriod {
                graha,
                level,
                start_offset_years: cursor,
                duration_years,
            };
            cursor += duration_years;
            child
        })
        .collect();
    snap_last_child_end(&mut children, parent);
    children
}

/// Full-length Mahadasha of `graha` starting at `start_offset_years`.
pub(crate) fn mahadasha(graha: Graha, start_offset_years: f64) -> DashaPeriod {
    DashaPeriod {
        graha,
        level: DashaLevel::Mahadasha,
        start_offset_years,
        duration_years: VIMSHOTTARI_YEARS[cycle_position(graha)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_lord() {
        let seq: Vec<_> = cyclic_sequence(Graha::Surya).collect();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq[0], (Graha::Surya, 6.0));
        assert_eq!(seq[1].0, Graha::Chandra);
        assert_eq!(seq[8].0, Graha::Shukra);
    }

    #[test]
    fn children_tile_parent() {
        let parent = mahadasha(Graha::Shukra, 3.0);
        let children = proportional_children(&parent);
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].graha, Graha::Shukra);
        assert!((children[0].start_offset_years - 3.0).abs() < 1e-12);
        // Venus-Venus: 20 * 20 / 120
        assert!((children[0].duration_years - 20.0 * 20.0 / 120.0).abs() < 1e-12);
        for w in children.windows(2) {
            assert!((w[0].end_offset_years() - w[1].start_offset_years).abs() < 1e-12);
        }
        assert!((children[8].end_offset_years() - parent.end_offset_years()).abs() < 1e-12);
    }

    #[test]
    fn pratyantardasha_has_no_children() {
        let parent = mahadasha(Graha::Ketu, 0.0);
        let antar = proportional_children(&parent);
        let pratyantar = proportional_children(&antar[0]);
        assert_eq!(pratyantar[0].level, DashaLevel::Pratyantardasha);
        assert!(proportional_children(&pratyantar[0]).is_empty());
    }
}
