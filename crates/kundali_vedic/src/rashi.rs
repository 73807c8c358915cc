//! Rashi (zodiac sign) lookup and degrees-minutes-seconds formatting.
//!
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg sidereal.

use serde::{Serialize, Serializer};

use crate::graha::{Graha, rashi_lord};
use crate::util::{clamped_index, normalize_360};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
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

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tatva {
    Fire,
    Earth,
    Air,
    Water,
}

/// Varna of a sign, following its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Rashi {
    /// Sanskrit name.
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

    /// Western name.
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

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fire, earth, air, water, repeating from Mesha.
    pub const fn tatva(self) -> Tatva {
        match self.index() % 4 {
            0 => Tatva::Fire,
            1 => Tatva::Earth,
            2 => Tatva::Air,
            _ => Tatva::Water,
        }
    }

    /// Water signs are Brahmin, fire Kshatriya, earth Vaishya, air Shudra.
    pub const fn varna(self) -> Varna {
        match self.tatva() {
            Tatva::Water => Varna::Brahmin,
            Tatva::Fire => Varna::Kshatriya,
            Tatva::Earth => Varna::Vaishya,
            Tatva::Air => Varna::Shudra,
        }
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02}\"", self.degrees, self.minutes, self.seconds.floor() as u8)
    }
}

/// Decimal degrees to DMS (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem - minutes as f64) * 60.0,
    }
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Determine rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = clamped_index(lon, 30.0, 12);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx],
        rashi_index: idx as u8,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
