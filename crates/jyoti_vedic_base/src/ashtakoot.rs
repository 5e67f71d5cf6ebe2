//! Ashtakoot (Guna Milan): eight-factor, 36-point compatibility scoring.
//!
//! Only each partner's Moon sign and Moon nakshatra take part. Sign-based
//! factors (Varna, Vashya, Graha Maitri, Bhakoot) use element triads and
//! sign distance; nakshatra-based factors (Tara, Yoni, Gana, Nadi) use the
//! tables in [`crate::classification`].
//!
//! Graha Maitri is approximated by element triads rather than the lords'
//! natural friendships; it never scores below 3.

use serde::Serialize;

use crate::chart::BirthChart;
use crate::classification::{Gana, NakshatraProfile, resolve_nakshatra};
use crate::error::VedicWarning;
use crate::graha::Graha;
use crate::log::warn;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Maximum obtainable score.
pub const ASHTAKOOT_MAX: u8 = 36;

/// Minimum total for a match to be considered acceptable.
pub const ACCEPTABLE_THRESHOLD: u8 = 18;

/// Tara points by `|index_a - index_b| mod 9`.
const TARA_POINTS: [u8; 9] = [0, 3, 0, 3, 0, 3, 0, 3, 3];

/// The eight kootas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Points available for this koota (1..=8, summing to 36).
    pub const fn max_points(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }

    /// What the koota measures.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Varna => "Spiritual compatibility",
            Self::Vashya => "Mutual attraction and control",
            Self::Tara => "Birth star compatibility",
            Self::Yoni => "Physical compatibility",
            Self::GrahaMaitri => "Mental compatibility",
            Self::Gana => "Temperament compatibility",
            Self::Bhakoot => "Emotional harmony and prosperity",
            Self::Nadi => "Health and genetics",
        }
    }
}

/// Per-koota quality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KootaStatus {
    /// Full points.
    Excellent,
    /// Some points.
    Good,
    /// No points.
    Poor,
}

/// Overall rating band of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    Poor,
    Acceptable,
    Good,
    Excellent,
}

impl Rating {
    /// ≥33 Excellent, ≥25 Good, ≥18 Acceptable, otherwise Poor.
    pub const fn from_total(total: u8) -> Self {
        if total >= 33 {
            Self::Excellent
        } else if total >= 25 {
            Self::Good
        } else if total >= ACCEPTABLE_THRESHOLD {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }
}

/// Score of a single koota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KootaResult {
    pub koota: Koota,
    pub name: &'static str,
    pub obtained: u8,
    pub maximum: u8,
    pub status: KootaStatus,
    /// `obtained / maximum` as a rounded percentage.
    pub percentage: u8,
}

impl KootaResult {
    fn new(koota: Koota, obtained: u8) -> Self {
        let maximum = koota.max_points();
        let obtained = obtained.min(maximum);
        let status = if obtained == maximum {
            KootaStatus::Excellent
        } else if obtained > 0 {
            KootaStatus::Good
        } else {
            KootaStatus::Poor
        };
        Self {
            koota,
            name: koota.name(),
            obtained,
            maximum,
            status,
            percentage: rounded_percent(obtained, maximum),
        }
    }
}

/// Full compatibility result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub kootas: [KootaResult; 8],
    pub total_obtained: u8,
    pub total_maximum: u8,
    pub percentage: u8,
    pub rating: Rating,
    /// `total_obtained >= 18`.
    pub acceptable: bool,
    pub warnings: Vec<VedicWarning>,
}

impl CompatibilityScore {
    /// Result for one koota.
    pub fn koota(&self, koota: Koota) -> &KootaResult {
        &self.kootas[koota as usize]
    }

    /// One-line verdict for display.
    pub fn summary(&self) -> String {
        let verdict = match self.percentage {
            75.. => "Excellent match! This is a very compatible couple.",
            50..=74 => "Good match. This couple is generally compatible.",
            _ => "Moderate match. Some precautions are necessary.",
        };
        format!(
            "{}/{} points. {verdict}",
            self.total_obtained, self.total_maximum
        )
    }
}

/// The Moon data one partner contributes to scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonProfile {
    pub rashi: Rashi,
    pub nakshatra: NakshatraProfile,
    /// Lookups that fell back to defaults while building the profile.
    pub warnings: Vec<VedicWarning>,
}

impl MoonProfile {
    /// Build from free-text sign and nakshatra names.
    ///
    /// An unknown sign defaults to Aries, an unknown nakshatra to the
    /// unresolved profile; each default records an `UnresolvedLookup`.
    pub fn from_names(sign: &str, nakshatra: &str) -> Self {
        let mut warnings = Vec::new();
        let rashi = Rashi::from_name(sign).unwrap_or_else(|| {
            warn!(input = sign, "unresolved sign name, defaulting to Aries");
            warnings.push(VedicWarning::UnresolvedLookup {
                table: "sign",
                input: sign.to_string(),
            });
            Rashi::Mesha
        });
        let profile = resolve_nakshatra(nakshatra);
        if !profile.resolved {
            warnings.push(VedicWarning::UnresolvedLookup {
                table: "nakshatra",
                input: nakshatra.to_string(),
            });
        }
        Self {
            rashi,
            nakshatra: profile,
            warnings,
        }
    }

    /// Build from the Moon's sidereal longitude.
    pub fn from_longitude(moon_lon: f64) -> Self {
        Self {
            rashi: rashi_from_longitude(moon_lon).rashi,
            nakshatra: NakshatraProfile::of(nakshatra_from_longitude(moon_lon).nakshatra),
            warnings: Vec::new(),
        }
    }

    /// Build from a chart's Moon position.
    pub fn from_chart(chart: &BirthChart) -> Self {
        Self::from_longitude(chart.position(Graha::Chandra).longitude)
    }
}

/// Varna (1): same quartile of the zodiac.
pub fn varna_points(a: Rashi, b: Rashi) -> u8 {
    u8::from(a.varna() == b.varna())
}

/// Vashya (2): same sign or same element.
pub fn vashya_points(a: Rashi, b: Rashi) -> u8 {
    if a == b || a.element() == b.element() {
        2
    } else {
        0
    }
}

/// Tara (3): nakshatra distance mod 9. Zero unless both are known.
pub fn tara_points(a: &NakshatraProfile, b: &NakshatraProfile) -> u8 {
    match (a.nakshatra, b.nakshatra) {
        (Some(x), Some(y)) => TARA_POINTS[(x.index().abs_diff(y.index()) % 9) as usize],
        _ => 0,
    }
}

/// Yoni (4): same animal 4, friendly pair 2. Zero unless both are known.
pub fn yoni_points(a: &NakshatraProfile, b: &NakshatraProfile) -> u8 {
    match (a.yoni, b.yoni) {
        (Some(x), Some(y)) if x == y => 4,
        (Some(x), Some(y)) if x.is_friendly_with(y) => 2,
        _ => 0,
    }
}

/// Graha Maitri (5): same sign or element 5, otherwise a neutral 3.
pub fn graha_maitri_points(a: Rashi, b: Rashi) -> u8 {
    if a == b || a.element() == b.element() {
        5
    } else {
        3
    }
}

/// Gana (6).
pub fn gana_points(a: Gana, b: Gana) -> u8 {
    use Gana::*;
    match (a, b) {
        _ if a == b => 6,
        (Deva, Manushya) | (Manushya, Deva) => 5,
        (Rakshasa, Manushya) | (Manushya, Rakshasa) => 3,
        _ => 0,
    }
}

/// Bhakoot (7): by absolute sign-number difference.
pub fn bhakoot_points(a: Rashi, b: Rashi) -> u8 {
    match a.number().abs_diff(b.number()) {
        0 | 1 | 2 | 4 | 5 | 7 | 8 | 10 | 11 => 7,
        3 | 6 | 9 | 12 => 0,
        _ => 3,
    }
}

/// Nadi (8): different Nadi 8, same Nadi 0.
pub fn nadi_points(a: &NakshatraProfile, b: &NakshatraProfile) -> u8 {
    if a.nadi == b.nadi { 0 } else { 8 }
}

/// Score two Moon profiles.
pub fn ashtakoot_score(a: &MoonProfile, b: &MoonProfile) -> CompatibilityScore {
    let (na, nb) = (&a.nakshatra, &b.nakshatra);
    let obtained = [
        varna_points(a.rashi, b.rashi),
        vashya_points(a.rashi, b.rashi),
        tara_points(na, nb),
        yoni_points(na, nb),
        graha_maitri_points(a.rashi, b.rashi),
        gana_points(na.gana, nb.gana),
        bhakoot_points(a.rashi, b.rashi),
        nadi_points(na, nb),
    ];
    let kootas: [KootaResult; 8] =
        std::array::from_fn(|i| KootaResult::new(ALL_KOOTAS[i], obtained[i]));
    let total_obtained = kootas.iter().map(|k| k.obtained).sum();

    let mut warnings = a.warnings.clone();
    warnings.extend(b.warnings.iter().cloned());

    CompatibilityScore {
        kootas,
        total_obtained,
        total_maximum: ASHTAKOOT_MAX,
        percentage: rounded_percent(total_obtained, ASHTAKOOT_MAX),
        rating: Rating::from_total(total_obtained),
        acceptable: total_obtained >= ACCEPTABLE_THRESHOLD,
        warnings,
    }
}

/// Score two charts by their Moon positions.
pub fn ashtakoot_from_charts(a: &BirthChart, b: &BirthChart) -> CompatibilityScore {
    ashtakoot_score(&MoonProfile::from_chart(a), &MoonProfile::from_chart(b))
}

fn rounded_percent(obtained: u8, maximum: u8) -> u8 {
    if maximum == 0 {
        return 0;
    }
    (obtained as f64 / maximum as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Yoni;
    use crate::nakshatra::Nakshatra;

    #[test]
    fn maxima_sum_to_36() {
        let sum: u8 = ALL_KOOTAS.iter().map(|k| k.max_points()).sum();
        assert_eq!(sum, ASHTAKOOT_MAX);
        for (i, k) in ALL_KOOTAS.iter().enumerate() {
            assert_eq!(*k as usize, i);
        }
    }

    #[test]
    fn rating_bands() {
        assert_eq!(Rating::from_total(36), Rating::Excellent);
        assert_eq!(Rating::from_total(33), Rating::Excellent);
        assert_eq!(Rating::from_total(32), Rating::Good);
        assert_eq!(Rating::from_total(25), Rating::Good);
        assert_eq!(Rating::from_total(24), Rating::Acceptable);
        assert_eq!(Rating::from_total(18), Rating::Acceptable);
        assert_eq!(Rating::from_total(17), Rating::Poor);
    }

    #[test]
    fn koota_status_and_percentage() {
        let full = KootaResult::new(Koota::Nadi, 8);
        assert_eq!(full.status, KootaStatus::Excellent);
        assert_eq!(full.percentage, 100);
        let part = KootaResult::new(Koota::GrahaMaitri, 3);
        assert_eq!(part.status, KootaStatus::Good);
        assert_eq!(part.percentage, 60);
        let none = KootaResult::new(Koota::Tara, 0);
        assert_eq!(none.status, KootaStatus::Poor);
        assert_eq!(none.percentage, 0);
    }

    #[test]
    fn obtained_is_clamped() {
        assert_eq!(KootaResult::new(Koota::Varna, 9).obtained, 1);
    }

    #[test]
    fn sign_factors() {
        assert_eq!(varna_points(Rashi::Mesha, Rashi::Mithuna), 1);
        assert_eq!(varna_points(Rashi::Mesha, Rashi::Karka), 0);
        assert_eq!(vashya_points(Rashi::Mesha, Rashi::Simha), 2);
        assert_eq!(vashya_points(Rashi::Mesha, Rashi::Vrishabha), 0);
        assert_eq!(graha_maitri_points(Rashi::Karka, Rashi::Meena), 5);
        assert_eq!(graha_maitri_points(Rashi::Karka, Rashi::Tula), 3);
    }

    #[test]
    fn bhakoot_distances() {
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Mesha), 7);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Vrishabha), 7);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Karka), 0);
        assert_eq!(bhakoot_points(Rashi::Mesha, Rashi::Tula), 0);
        assert_eq!(bhakoot_points(Rashi::Meena, Rashi::Mesha), 7);
    }

    #[test]
    fn gana_matrix() {
        assert_eq!(gana_points(Gana::Deva, Gana::Deva), 6);
        assert_eq!(gana_points(Gana::Manushya, Gana::Deva), 5);
        assert_eq!(gana_points(Gana::Rakshasa, Gana::Manushya), 3);
        assert_eq!(gana_points(Gana::Deva, Gana::Rakshasa), 0);
        assert_eq!(gana_points(Gana::Rakshasa, Gana::Deva), 0);
    }

    #[test]
    fn tara_table() {
        let p = |n| NakshatraProfile::of(n);
        assert_eq!(tara_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Ashwini)), 0);
        assert_eq!(tara_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Bharani)), 3);
        assert_eq!(tara_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Krittika)), 0);
        // distance 17 mod 9 = 8
        assert_eq!(tara_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Jyeshtha)), 3);
        assert_eq!(
            tara_points(&p(Nakshatra::Ashwini), &NakshatraProfile::unresolved()),
            0
        );
    }

    #[test]
    fn yoni_rules() {
        let p = |n| NakshatraProfile::of(n);
        assert_eq!(yoni_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Shatabhisha)), 4);
        assert_eq!(yoni_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Bharani)), 2);
        assert_eq!(yoni_points(&p(Nakshatra::Krittika), &p(Nakshatra::Pushya)), 4);
        assert_eq!(yoni_points(&p(Nakshatra::Ashwini), &p(Nakshatra::Chitra)), 0);
        let unknown = NakshatraProfile::unresolved();
        assert_eq!(unknown.yoni, None::<Yoni>);
        assert_eq!(yoni_points(&unknown, &unknown), 0);
    }

    #[test]
    fn identical_ashwini_aries() {
        let a = MoonProfile::from_names("Aries", "Ashwini");
        let s = ashtakoot_score(&a, &a);
        assert_eq!(s.koota(Koota::Varna).obtained, 1);
        assert_eq!(s.koota(Koota::Vashya).obtained, 2);
        assert_eq!(s.koota(Koota::Tara).obtained, 0);
        assert_eq!(s.koota(Koota::Yoni).obtained, 4);
        assert_eq!(s.koota(Koota::GrahaMaitri).obtained, 5);
        assert_eq!(s.koota(Koota::Gana).obtained, 6);
        assert_eq!(s.koota(Koota::Bhakoot).obtained, 7);
        assert_eq!(s.koota(Koota::Nadi).obtained, 0);
        assert_eq!(s.total_obtained, 25);
        assert_eq!(s.rating, Rating::Good);
        assert!(s.acceptable);
        assert!(s.warnings.is_empty());
    }

    #[test]
    fn unresolved_names_warn_and_default() {
        let a = MoonProfile::from_names("Unknown", "Nowhere");
        assert_eq!(a.rashi, Rashi::Mesha);
        assert_eq!(a.warnings.len(), 2);
        let b = MoonProfile::from_names("Leo", "Magha");
        let s = ashtakoot_score(&a, &b);
        assert_eq!(s.warnings.len(), 2);
        assert_eq!(s.koota(Koota::Tara).obtained, 0);
        assert_eq!(s.koota(Koota::Yoni).obtained, 0);
    }

    #[test]
    fn summary_text() {
        let a = MoonProfile::from_names("Aries", "Ashwini");
        let s = ashtakoot_score(&a, &a);
        assert!(s.summary().starts_with("25/36 points. Good match"), "{}", s.summary());
    }
}
