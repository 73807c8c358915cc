//! Nakshatra (lunar mansion) lookup and static attributes.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20'.
//!
//! Every nakshatra carries a fixed set of attributes used in matching and
//! naming: Vimshottari lord, gana (temperament), nadi (constitution), yoni
//! (animal), varna and tatva (from the sign in which it begins) and the four
//! pada syllables.

use serde::{Serialize, Serializer};

use crate::dasha::vimshottari_lord;
use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Tatva, Varna};
use crate::util::{clamped_index, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
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

impl Nakshatra {
    /// Display name of the nakshatra.
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

    /// Nakshatra at a 0-based index, clamped to Revati.
    pub const fn from_index(index: u8) -> Self {
        let i = if index > 26 { 26 } else { index };
        ALL_NAKSHATRAS[i as usize]
    }

    /// Case-insensitive lookup ignoring spaces ("purvaphalguni" matches).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        ALL_NAKSHATRAS.into_iter().find(|n| {
            let own: String = n.name().chars().filter(|c| *c != ' ').collect();
            own.eq_ignore_ascii_case(&wanted)
        })
    }

    /// Vimshottari lord (index mod 9 into the dasha cycle).
    pub const fn lord(self) -> Graha {
        vimshottari_lord(self.index())
    }

    /// Sidereal longitude at which the nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }

    /// Full static attribute record.
    pub fn attributes(self) -> NakshatraAttributes {
        let i = self.index() as usize;
        let start_rashi = ALL_RASHIS[clamped_index(self.start_deg(), 30.0, 12)];
        NakshatraAttributes {
            lord: self.lord(),
            gana: GANA[i],
            nadi: nadi_of(self.index()),
            yoni: YONI[i],
            varna: start_rashi.varna(),
            tatva: start_rashi.tatva(),
            syllables: SYLLABLES[i],
        }
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Temperament class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Ayurvedic constitution class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Static attributes of one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraAttributes {
    pub lord: Graha,
    pub gana: Gana,
    pub nadi: Nadi,
    pub yoni: &'static str,
    pub varna: Varna,
    pub tatva: Tatva,
    /// Naming syllables for padas 1-4.
    pub syllables: [&'static str; 4],
}

use Gana::{Deva as D, Manushya as M, Rakshasa as R};

const GANA: [Gana; 27] = [
    D, M, R, M, D, M, D, D, R, // Ashwini..Ashlesha
    R, M, M, D, R, D, R, D, R, // Magha..Jyeshtha
    R, M, M, D, R, R, M, M, D, // Mula..Revati
];

// Nadi repeats in a zig-zag of six: Adi, Madhya, Antya, Antya, Madhya, Adi.
const fn nadi_of(index: u8) -> Nadi {
    match index % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

const YONI: [&str; 27] = [
    "Horse", "Elephant", "Goat", "Serpent", "Serpent", "Dog", "Cat", "Goat", "Cat",
    "Rat", "Rat", "Cow", "Buffalo", "Tiger", "Buffalo", "Tiger", "Deer", "Deer",
    "Dog", "Monkey", "Mongoose", "Monkey", "Lion", "Horse", "Lion", "Cow", "Elephant",
];

const SYLLABLES: [[&str; 4]; 27] = [
    ["Chu", "Che", "Cho", "La"],
    ["Li", "Lu", "Le", "Lo"],
    ["A", "I", "U", "E"],
    ["O", "Va", "Vi", "Vu"],
    ["Ve", "Vo", "Ka", "Ki"],
    ["Ku", "Gha", "Ng", "Chha"],
    ["Ke", "Ko", "Ha", "Hi"],
    ["Hu", "He", "Ho", "Da"],
    ["Di", "Du", "De", "Do"],
    ["Ma", "Mi", "Mu", "Me"],
    ["Mo", "Ta", "Ti", "Tu"],
    ["Te", "To", "Pa", "Pi"],
    ["Pu", "Sha", "Na", "Tha"],
    ["Pe", "Po", "Ra", "Ri"],
    ["Ru", "Re", "Ro", "Ta"],
    ["Ti", "Tu", "Te", "To"],
    ["Na", "Ni", "Nu", "Ne"],
    ["No", "Ya", "Yi", "Yu"],
    ["Ye", "Yo", "Bha", "Bhi"],
    ["Bhu", "Dha", "Pha", "Dha"],
    ["Bhe", "Bho", "Ja", "Ji"],
    ["Khi", "Khu", "Khe", "Kho"],
    ["Ga", "Gi", "Gu", "Ge"],
    ["Go", "Sa", "Si", "Su"],
    ["Se", "So", "Da", "Di"],
    ["Du", "Tha", "Jha", "Na"],
    ["De", "Do", "Cha", "Chi"],
];

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction_elapsed: f64,
}

/// Determine nakshatra and pada from a sidereal ecliptic longitude.
///
/// The index is clamped to [0, 26] so that rounding at 360 deg never
/// produces a 28th entry.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = clamped_index(lon, NAKSHATRA_SPAN_27, 27);
    let degrees_in_nakshatra = lon - idx as f64 * NAKSHATRA_SPAN_27;
    let pada = clamped_index(degrees_in_nakshatra, PADA_SPAN, 4) as u8 + 1;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx],
        nakshatra_index: idx as u8,
        pada,
        degrees_in_nakshatra,
        fraction_elapsed: (degrees_in_nakshatra / NAKSHATRA_SPAN_27).clamp(0.0, 1.0),
    }
}
