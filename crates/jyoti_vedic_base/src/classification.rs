//! Static classification tables used by compatibility scoring and dasha
//! lookup: Gana, Yoni, Nadi and the Vimshottari lord of each nakshatra,
//! plus the Varna and element of each sign.

use serde::Serialize;

use crate::graha::Graha;
use crate::log::warn;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Animal symbol of a nakshatra.
///
/// Sheep and Goat are one group here, so Krittika and Pushya match fully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Pairs of distinct Yoni groups treated as friendly.
pub const FRIENDLY_YONI_PAIRS: [(Yoni, Yoni); 5] = [
    (Yoni::Horse, Yoni::Elephant),
    (Yoni::Cat, Yoni::Monkey),
    (Yoni::Rat, Yoni::Cow),
    (Yoni::Tiger, Yoni::Lion),
    (Yoni::Dog, Yoni::Mongoose),
];

/// Pulse class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Social class of a sign, by quartile of the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

/// Element triad of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Vimshottari lords in cycle order, starting from Ashwini's lord.
pub const DASHA_LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Nakshatra {
    pub const fn gana(self) -> Gana {
        use Nakshatra::*;
        match self {
            Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
            | Revati => Gana::Deva,
            Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
            | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
            Krittika | Ashlesha | Magha | Chitra | Vishakha | Jyeshtha | Mula | Dhanishtha
            | Shatabhisha => Gana::Rakshasa,
        }
    }

    /// Yoni animal, 14 groups: Krittika and Pushya share the merged Sheep/Goat group.
    pub const fn yoni(self) -> Yoni {
        use Nakshatra::*;
        match self {
            Ashwini | Shatabhisha => Yoni::Horse,
            Bharani | Revati => Yoni::Elephant,
            Krittika | Pushya => Yoni::Sheep,
            Rohini | Mrigashira => Yoni::Serpent,
            Ardra | Mula => Yoni::Dog,
            Punarvasu | Ashlesha => Yoni::Cat,
            Magha | PurvaPhalguni => Yoni::Rat,
            UttaraPhalguni | UttaraBhadrapada => Yoni::Cow,
            Hasta | Swati => Yoni::Buffalo,
            Chitra | Vishakha => Yoni::Tiger,
            Anuradha | Jyeshtha => Yoni::Deer,
            PurvaAshadha | Shravana => Yoni::Monkey,
            UttaraAshadha => Yoni::Mongoose,
            Dhanishtha | PurvaBhadrapada => Yoni::Lion,
        }
    }

    /// Nadi grouping as used by the matchmaking tables this engine scores
    /// against. It differs from the strict three-step zigzag.
    pub const fn nadi(self) -> Nadi {
        use Nakshatra::*;
        match self {
            Ashwini | Ardra | Punarvasu | UttaraPhalguni | Hasta | Jyeshtha | Mula | Shravana
            | Dhanishtha | Shatabhisha => Nadi::Adi,
            Bharani | Mrigashira | Pushya | PurvaPhalguni | Chitra | Anuradha | PurvaAshadha
            | UttaraAshadha | PurvaBhadrapada => Nadi::Madhya,
            Krittika | Rohini | Ashlesha | Magha | Swati | Vishakha | UttaraBhadrapada
            | Revati => Nadi::Antya,
        }
    }

    /// Vimshottari Mahadasha lord ruling this nakshatra.
    pub const fn dasha_lord(self) -> Graha {
        DASHA_LORD_CYCLE[(self.index() % 9) as usize]
    }
}

impl Rashi {
    /// Varna by quartile: `ceil(sign / 3)`.
    pub const fn varna(self) -> Varna {
        match self.index() / 3 {
            0 => Varna::Brahmin,
            1 => Varna::Kshatriya,
            2 => Varna::Vaishya,
            _ => Varna::Shudra,
        }
    }

    /// Element triad: fire {1,5,9}, earth {2,6,10}, air {3,7,11}, water {4,8,12}.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl Yoni {
    /// Whether two distinct groups form a friendly pair.
    pub fn is_friendly_with(self, other: Yoni) -> bool {
        FRIENDLY_YONI_PAIRS
            .iter()
            .any(|&(a, b)| (a == self && b == other) || (a == other && b == self))
    }
}

/// Defaults used when a nakshatra name cannot be resolved.
pub const DEFAULT_GANA: Gana = Gana::Manushya;
pub const DEFAULT_NADI: Nadi = Nadi::Madhya;
pub const DEFAULT_DASHA_LORD: Graha = Graha::Ketu;

/// Classification of a Moon nakshatra, with defaults when unresolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraProfile {
    pub nakshatra: Option<Nakshatra>,
    pub gana: Gana,
    pub yoni: Option<Yoni>,
    pub nadi: Nadi,
    pub dasha_lord: Graha,
    /// False when `nakshatra` is `None` and the defaults are in force.
    pub resolved: bool,
}

impl NakshatraProfile {
    pub const fn of(nakshatra: Nakshatra) -> Self {
        Self {
            nakshatra: Some(nakshatra),
            gana: nakshatra.gana(),
            yoni: Some(nakshatra.yoni()),
            nadi: nakshatra.nadi(),
            dasha_lord: nakshatra.dasha_lord(),
            resolved: true,
        }
    }

    pub const fn unresolved() -> Self {
        Self {
            nakshatra: None,
            gana: DEFAULT_GANA,
            yoni: None,
            nadi: DEFAULT_NADI,
            dasha_lord: DEFAULT_DASHA_LORD,
            resolved: false,
        }
    }
}

/// Resolve a nakshatra name into its classification profile.
///
/// Unknown names produce [`NakshatraProfile::unresolved`].
pub fn resolve_nakshatra(name: &str) -> NakshatraProfile {
    match Nakshatra::from_name(name) {
        Some(n) => NakshatraProfile::of(n),
        None => {
            warn!(input = name, "unresolved nakshatra name, using defaults");
            NakshatraProfile::unresolved()
        }
    }
}
