//! Nakshatra (lunar mansion) lookup by longitude or by name.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20', each
//! split into 4 padas of 3 deg 20'.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Spelling variants, keyed by the folded form (lowercase ASCII letters
/// and digits only). Canonical names are matched separately.
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("aswini", Nakshatra::Ashwini),
    ("ashvini", Nakshatra::Ashwini),
    ("asvini", Nakshatra::Ashwini),
    ("bharni", Nakshatra::Bharani),
    ("kritika", Nakshatra::Krittika),
    ("krithika", Nakshatra::Krittika),
    ("karthika", Nakshatra::Krittika),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("mrigasirsha", Nakshatra::Mrigashira),
    ("mrugasira", Nakshatra::Mrigashira),
    ("arudra", Nakshatra::Ardra),
    ("aridra", Nakshatra::Ardra),
    ("thiruvathira", Nakshatra::Ardra),
    ("punarpusam", Nakshatra::Punarvasu),
    ("pushyami", Nakshatra::Pushya),
    ("pusam", Nakshatra::Pushya),
    ("poosam", Nakshatra::Pushya),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("ayilyam", Nakshatra::Ashlesha),
    ("makha", Nakshatra::Magha),
    ("makam", Nakshatra::Magha),
    ("pphalguni", Nakshatra::PurvaPhalguni),
    ("poorvaphalguni", Nakshatra::PurvaPhalguni),
    ("purvaphalguni", Nakshatra::PurvaPhalguni),
    ("pubba", Nakshatra::PurvaPhalguni),
    ("uphalguni", Nakshatra::UttaraPhalguni),
    ("uttaraphalguni", Nakshatra::UttaraPhalguni),
    ("utharaphalguni", Nakshatra::UttaraPhalguni),
    ("uthiram", Nakshatra::UttaraPhalguni),
    ("hastha", Nakshatra::Hasta),
    ("chithra", Nakshatra::Chitra),
    ("chithirai", Nakshatra::Chitra),
    ("svati", Nakshatra::Swati),
    ("swathi", Nakshatra::Swati),
    ("visakha", Nakshatra::Vishakha),
    ("vishaka", Nakshatra::Vishakha),
    ("visakam", Nakshatra::Vishakha),
    ("anusham", Nakshatra::Anuradha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("jyesta", Nakshatra::Jyeshtha),
    ("kettai", Nakshatra::Jyeshtha),
    ("moola", Nakshatra::Mula),
    ("moolam", Nakshatra::Mula),
    ("pashadha", Nakshatra::PurvaAshadha),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("poorvashadha", Nakshatra::PurvaAshadha),
    ("purvasadha", Nakshatra::PurvaAshadha),
    ("purvashada", Nakshatra::PurvaAshadha),
    ("purvaasadha", Nakshatra::PurvaAshadha),
    ("pooradam", Nakshatra::PurvaAshadha),
    ("uashadha", Nakshatra::UttaraAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("uttarasadha", Nakshatra::UttaraAshadha),
    ("uttarashada", Nakshatra::UttaraAshadha),
    ("uttaraasadha", Nakshatra::UttaraAshadha),
    ("uthradam", Nakshatra::UttaraAshadha),
    ("sravana", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("thiruvonam", Nakshatra::Shravana),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("dhanista", Nakshatra::Dhanishtha),
    ("avittam", Nakshatra::Dhanishtha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("sathayam", Nakshatra::Shatabhisha),
    ("pbhadrapada", Nakshatra::PurvaBhadrapada),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("poorvabhadrapada", Nakshatra::PurvaBhadrapada),
    ("poorattathi", Nakshatra::PurvaBhadrapada),
    ("ubhadrapada", Nakshatra::UttaraBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("utharabhadrapada", Nakshatra::UttaraBhadrapada),
    ("uthrattathi", Nakshatra::UttaraBhadrapada),
    ("revathi", Nakshatra::Revati),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra from a 0-based index taken modulo 27.
    pub const fn from_index_wrapping(idx: i64) -> Self {
        ALL_NAKSHATRAS_27[idx.rem_euclid(27) as usize]
    }

    /// Longitude where the nakshatra begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }

    /// Resolve a nakshatra from free text.
    ///
    /// Case, whitespace, punctuation and common diacritics are ignored, so
    /// `"Pūrva Āṣāḍhā"`, `"P.Ashadha"` and `"purvashadha"` all match. An
    /// exact name wins; otherwise the longest known spelling contained in
    /// the input is used.
    pub fn from_name(input: &str) -> Option<Self> {
        let key = fold_name(input);
        if key.is_empty() {
            return None;
        }
        let mut best: Option<(usize, Self)> = None;
        let canonical = ALL_NAKSHATRAS_27.iter().map(|n| (fold_name(n.name()), *n));
        let aliases = NAKSHATRA_ALIASES.iter().map(|&(a, n)| (a.to_string(), n));
        for (spelling, nak) in canonical.chain(aliases) {
            if spelling == key {
                return Some(nak);
            }
            if key.contains(&spelling) && best.is_none_or(|(len, _)| spelling.len() > len) {
                best = Some((spelling.len(), nak));
            }
        }
        best.map(|(_, nak)| nak)
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase ASCII fold: strips diacritics and drops anything that is not
/// a letter or digit.
fn fold_name(s: &str) -> String {
    s.chars()
        .filter_map(|c| {
            let base = match c {
                'ā' | 'Ā' | 'á' | 'à' | 'â' | 'ä' => 'a',
                'ī' | 'Ī' | 'í' | 'ì' | 'î' | 'ï' => 'i',
                'ū' | 'Ū' | 'ú' | 'ù' | 'û' | 'ü' => 'u',
                'ē' | 'é' | 'è' | 'ê' => 'e',
                'ō' | 'ó' | 'ò' | 'ô' => 'o',
                'ṣ' | 'Ṣ' | 'ś' | 'Ś' => 's',
                'ṭ' | 'Ṭ' => 't',
                'ḍ' | 'Ḍ' => 'd',
                'ṇ' | 'Ṇ' | 'ñ' | 'ṅ' => 'n',
                'ṛ' | 'Ṛ' | 'ṝ' => 'r',
                'ṃ' | 'ṁ' => 'm',
                'ḥ' => 'h',
                other => other,
            };
            base.is_ascii_alphanumeric()
                .then(|| base.to_ascii_lowercase())
        })
        .collect()
}

/// Result of a 27-nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_elapsed: f64,
}

/// Determine nakshatra and pada from a sidereal longitude.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - idx as f64 * NAKSHATRA_SPAN_27).max(0.0);
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[idx as usize],
        nakshatra_index: idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        fraction_elapsed: (degrees_in_nakshatra / NAKSHATRA_SPAN_27).min(1.0),
    }
}
