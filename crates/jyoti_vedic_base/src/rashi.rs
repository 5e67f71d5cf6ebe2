//! Rashi (zodiac sign) lookup and DMS formatting.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Mesha (Aries) at 0 degrees. Signs are numbered 1..=12 at the
//! engine boundary and indexed 0..=11 internally.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Arc of one sign in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries). Serialized by Western name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    #[serde(rename = "Aries")]
    Mesha,
    #[serde(rename = "Taurus")]
    Vrishabha,
    #[serde(rename = "Gemini")]
    Mithuna,
    #[serde(rename = "Cancer")]
    Karka,
    #[serde(rename = "Leo")]
    Simha,
    #[serde(rename = "Virgo")]
    Kanya,
    #[serde(rename = "Libra")]
    Tula,
    #[serde(rename = "Scorpio")]
    Vrischika,
    #[serde(rename = "Sagittarius")]
    Dhanu,
    #[serde(rename = "Capricorn")]
    Makara,
    #[serde(rename = "Aquarius")]
    Kumbha,
    #[serde(rename = "Pisces")]
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Extra spellings seen in upstream data, checked after the canonical names.
const RASHI_ALIASES: [(&str, Rashi); 6] = [
    ("vrishabh", Rashi::Vrishabha),
    ("karkata", Rashi::Karka),
    ("kark", Rashi::Karka),
    ("vrishchik", Rashi::Vrischika),
    ("dhanus", Rashi::Dhanu),
    ("mina", Rashi::Meena),
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Aries=1 .. Pisces=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 1-based sign number.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 {
            Some(ALL_RASHIS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Rashi from a 0-based index taken modulo 12.
    pub const fn from_index_wrapping(idx: i64) -> Self {
        ALL_RASHIS[idx.rem_euclid(12) as usize]
    }

    /// The sign `n` places from this one, counting this sign as 1st.
    ///
    /// `nth_from(1)` is the sign itself, `nth_from(12)` the sign before it.
    pub const fn nth_from(self, n: i64) -> Self {
        Self::from_index_wrapping(self.index() as i64 + n - 1)
    }

    /// Longitude of the first degree of the sign.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * RASHI_SPAN
    }

    /// Resolve a sign from free text.
    ///
    /// Matching is case-insensitive on English and Sanskrit names. An exact
    /// name wins; otherwise the first name contained in the input is used,
    /// so `"Moon in Scorpio"` resolves to Vrischika.
    pub fn from_name(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        let exact = ALL_RASHIS.iter().copied().find(|r| {
            r.western_name().eq_ignore_ascii_case(&key) || r.name().eq_ignore_ascii_case(&key)
        });
        if exact.is_some() {
            return exact;
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                key.contains(&r.western_name().to_ascii_lowercase())
                    || key.contains(&r.name().to_ascii_lowercase())
            })
            .or_else(|| {
                RASHI_ALIASES
                    .iter()
                    .find(|(alias, _)| key.contains(alias))
                    .map(|&(_, r)| r)
            })
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Convert decimal degrees to degrees-minutes-seconds (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (remainder - minutes) * 60.0,
    }
}

/// Sign position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 1-based sign number.
    pub sign: u8,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
}

/// Determine the sign of a sidereal longitude (any real, normalized mod 360).
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degree_in_sign = lon - idx as f64 * RASHI_SPAN;
    let rashi = ALL_RASHIS[idx as usize];
    RashiInfo {
        rashi,
        sign: rashi.number(),
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
    }
}

/// Longitude of a position given as sign plus degrees within it.
pub fn rashi_to_longitude(rashi: Rashi, degree_in_sign: f64) -> f64 {
    normalize_360(rashi.start_longitude() + degree_in_sign)
}
