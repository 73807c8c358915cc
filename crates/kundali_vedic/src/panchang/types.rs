//! Types for panchang results.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::NakshatraAttributes;

/// Inputs: sidereal Sun and Moon longitudes, the Julian Day they were
/// computed for, and the observer's location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangInput {
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    pub julian_day: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiInfo {
    pub name: &'static str,
    /// 1-based position in the 15-name table.
    pub number: u8,
    /// Raw 0-based index over the full lunar month (0..29).
    pub index: u8,
    pub paksha: Paksha,
}

/// A named element with its 1-based table number (yoga, karan).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedElement {
    pub name: &'static str,
    pub number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangNakshatra {
    pub name: &'static str,
    pub number: u8,
    pub pada: u8,
    pub lord: Graha,
    pub attributes: NakshatraAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangResult {
    pub tithi: TithiInfo,
    pub yoga: NamedElement,
    pub karan: NamedElement,
    pub nakshatra: PanchangNakshatra,
    pub weekday: &'static str,
    /// Local clock time "HH:MM".
    pub sunrise: String,
    /// Local clock time "HH:MM".
    pub sunset: String,
}
