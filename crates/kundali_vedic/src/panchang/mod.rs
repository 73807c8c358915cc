//! Panchang: the five limbs of the Vedic almanac.
//!
//! Tithi, yoga, karan and nakshatra are table lookups on the Sun and Moon
//! sidereal longitudes; the weekday comes from the Julian Day. Indices are
//! clamped into their tables, so any finite or non-finite input produces a
//! result.

pub mod sunrise;
pub mod tables;
pub mod types;

pub use sunrise::{STANDARD_MERIDIAN_DEG, format_clock, sunrise_hours, sunset_hours};
pub use tables::{KARAN_NAMES, TITHI_NAMES, WEEKDAY_NAMES, YOGA_NAMES};
pub use types::{
    NamedElement, Paksha, PanchangInput, PanchangNakshatra, PanchangResult, TithiInfo,
};

use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::util::{clamped_index, normalize_360};

/// Angular width of one tithi.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Angular width of one karan.
pub const KARAN_SPAN_DEG: f64 = 6.0;

/// Tithi from the Moon-Sun elongation.
pub fn tithi(sun_lon: f64, moon_lon: f64) -> TithiInfo {
    let angle = normalize_360(moon_lon - sun_lon);
    let index = clamped_index(angle, TITHI_SPAN_DEG, 30);
    let slot = clamped_index(angle, TITHI_SPAN_DEG, TITHI_NAMES.len());
    TithiInfo {
        name: TITHI_NAMES[slot],
        number: slot as u8 + 1,
        index: index as u8,
        paksha: if index < 15 { Paksha::Shukla } else { Paksha::Krishna },
    }
}

/// Yoga from the Sun+Moon sum.
pub fn yoga(sun_lon: f64, moon_lon: f64) -> NamedElement {
    let sum = normalize_360(sun_lon + moon_lon);
    let i = clamped_index(sum, NAKSHATRA_SPAN_27, YOGA_NAMES.len());
    NamedElement {
        name: YOGA_NAMES[i],
        number: i as u8 + 1,
    }
}

/// Karan from the tithi angle. Angles past the eleventh half-tithi all
/// land on the last entry.
pub fn karan(sun_lon: f64, moon_lon: f64) -> NamedElement {
    let angle = normalize_360(moon_lon - sun_lon);
    let i = clamped_index(angle, KARAN_SPAN_DEG, KARAN_NAMES.len());
    NamedElement {
        name: KARAN_NAMES[i],
        number: i as u8 + 1,
    }
}

/// Weekday index, 0 = Sunday.
pub fn weekday_index(julian_day: f64) -> usize {
    let d = (julian_day + 1.5).floor();
    if !d.is_finite() {
        return 0;
    }
    (d.rem_euclid(7.0) as usize).min(WEEKDAY_NAMES.len() - 1)
}

/// Full panchang for one moment and place.
pub fn panchang(input: &PanchangInput) -> PanchangResult {
    let nak = nakshatra_from_longitude(input.moon_longitude);
    let attributes = nak.nakshatra.attributes();

    PanchangResult {
        tithi: tithi(input.sun_longitude, input.moon_longitude),
        yoga: yoga(input.sun_longitude, input.moon_longitude),
        karan: karan(input.sun_longitude, input.moon_longitude),
        nakshatra: PanchangNakshatra {
            name: nak.nakshatra.name(),
            number: nak.nakshatra_index + 1,
            pada: nak.pada,
            lord: attributes.lord,
            attributes,
        },
        weekday: WEEKDAY_NAMES[weekday_index(input.julian_day)],
        sunrise: format_clock(sunrise_hours(input.latitude, input.longitude)),
        sunset: format_clock(sunset_hours(input.latitude, input.longitude)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    #[test]
    fn new_moon_is_pratipada() {
        let t = tithi(100.0, 100.0);
        assert_eq!(t.name, "Pratipada");
        assert_eq!(t.number, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
    }

    #[test]
    fn elongation_354_clamps_to_last_tithi() {
        let t = tithi(0.0, 354.0);
        assert_eq!(t.number, 15);
        assert_eq!(t.name, "Purnima/Amavasya");
        assert_eq!(t.index, 29);
        assert_eq!(t.paksha, Paksha::Krishna);
    }

    #[test]
    fn elongation_wraps_negative() {
        // Moon 10 deg behind the Sun = 350 deg elongation.
        assert_eq!(tithi(20.0, 10.0).index, 29);
    }

    #[test]
    fn yoga_lookup() {
        assert_eq!(yoga(0.0, 0.0).name, "Vishkambha");
        assert_eq!(yoga(200.0, 159.9).name, "Vaidhriti");
        assert_eq!(yoga(10.0, 10.0).number, 2);
    }

    #[test]
    fn karan_clamps_past_table() {
        assert_eq!(karan(0.0, 0.0).name, "Bava");
        assert_eq!(karan(0.0, 13.0).name, "Kaulava");
        assert_eq!(karan(0.0, 300.0).name, "Kimstughna");
    }

    #[test]
    fn weekday_j2000_is_saturday() {
        // 2000-Jan-01 12:00 TT was a Saturday.
        assert_eq!(WEEKDAY_NAMES[weekday_index(2_451_545.0)], "Saturday");
    }

    #[test]
    fn weekday_non_finite_is_clamped() {
        assert_eq!(weekday_index(f64::NAN), 0);
    }

    #[test]
    fn full_panchang() {
        let p = panchang(&PanchangInput {
            sun_longitude: 270.5,
            moon_longitude: 0.0,
            julian_day: 2_447_907.7,
            latitude: 13.0827,
            longitude: 80.2707,
        });
        assert_eq!(p.nakshatra.name, "Ashwini");
        assert_eq!(p.nakshatra.lord, Graha::Ketu);
        assert_eq!(p.nakshatra.number, 1);
        assert_eq!(p.sunrise, "06:17");
        assert_eq!(p.tithi.paksha, Paksha::Shukla);
    }

    #[test]
    fn nan_inputs_do_not_panic() {
        let p = panchang(&PanchangInput {
            sun_longitude: f64::NAN,
            moon_longitude: f64::INFINITY,
            julian_day: f64::NAN,
            latitude: 0.0,
            longitude: 82.5,
        });
        assert_eq!(p.tithi.number, 1);
    }
}
