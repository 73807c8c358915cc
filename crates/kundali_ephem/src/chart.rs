//! Birth chart assembly: nine grahas plus the Ascendant, sidereal.
//!
//! Civil local time is shifted to UT by a fixed offset; the UT Julian Day is
//! used directly as the dynamical time argument (ΔT is ignored).

use serde::{Serialize, Serializer};

use kundali_time::{IST_OFFSET_HOURS, LocalDateTime, julian_centuries};
use kundali_vedic::{
    ALL_GRAHAS, Graha, Nakshatra, Rashi, lahiri_ayanamsa_deg, nakshatra_from_longitude,
    rashi_from_longitude, tropical_to_sidereal,
};

use crate::ascendant::ascendant;
use crate::calibration::Calibration;
use crate::error::EphemError;
use crate::input::{BirthInput, validate_coordinates};
use crate::nodes::{mean_ketu_deg, mean_rahu_deg};
use crate::planets::{EclipticPosition, Planet, moon_position, planet_position, sun_position};
use crate::retrograde::RetrogradeModel;

/// Half-width of the central difference used for speeds, in days.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Settings for a chart computation.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisConfig {
    /// Offset of the birth clock ahead of UTC, hours.
    pub utc_offset_hours: f64,
    pub calibration: Calibration,
    pub retrograde_model: RetrogradeModel,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: IST_OFFSET_HOURS,
            calibration: Calibration::professional(),
            retrograde_model: RetrogradeModel::default(),
        }
    }
}

/// A point reported in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Graha(Graha),
    Ascendant,
}

impl ChartPoint {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Ascendant => "Ascendant",
        }
    }
}

impl std::fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ChartPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Sidereal position of one chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryPosition {
    pub name: ChartPoint,
    /// Sidereal longitude, degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Geocentric distance, AU (0 for the nodes and the Ascendant).
    pub distance: f64,
    /// Longitude speed, degrees/day; negative means retrograde motion.
    pub speed: f64,
    pub retrograde: bool,
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

impl PlanetaryPosition {
    fn new(
        name: ChartPoint,
        longitude: f64,
        latitude: f64,
        distance: f64,
        speed: f64,
        retrograde: bool,
    ) -> Self {
        let nak = nakshatra_from_longitude(longitude);
        Self {
            name,
            longitude,
            latitude,
            distance,
            speed,
            retrograde,
            rashi: rashi_from_longitude(longitude).rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
        }
    }
}

/// All positions for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    /// UT Julian Day of birth.
    pub julian_day: f64,
    /// UT birth instant, `YYYY-MM-DDTHH:MM:SS`.
    pub ut: String,
    /// Lahiri ayanamsa applied, degrees.
    pub ayanamsa: f64,
    /// Sun..Ketu in chart order, then the Ascendant.
    pub positions: Vec<PlanetaryPosition>,
}

impl BirthChart {
    pub fn position(&self, point: ChartPoint) -> Option<&PlanetaryPosition> {
        self.positions.iter().find(|p| p.name == point)
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetaryPosition> {
        self.position(ChartPoint::Graha(graha))
    }

    pub fn ascendant(&self) -> Option<&PlanetaryPosition> {
        self.position(ChartPoint::Ascendant)
    }
}

fn as_planet(graha: Graha) -> Option<Planet> {
    match graha {
        Graha::Mangal => Some(Planet::Mars),
        Graha::Buddh => Some(Planet::Mercury),
        Graha::Guru => Some(Planet::Jupiter),
        Graha::Shukra => Some(Planet::Venus),
        Graha::Shani => Some(Planet::Saturn),
        _ => None,
    }
}

/// Tropical geocentric position of a graha at `t` centuries from J2000.
pub fn tropical_position(graha: Graha, t: f64) -> EclipticPosition {
    let node = |longitude| EclipticPosition {
        longitude,
        latitude: 0.0,
        distance: 0.0,
    };
    match graha {
        Graha::Surya => sun_position(t),
        Graha::Chandra => moon_position(t),
        Graha::Rahu => node(mean_rahu_deg(t)),
        Graha::Ketu => node(mean_ketu_deg(t)),
        other => match as_planet(other) {
            Some(p) => planet_position(p, t),
            None => node(0.0),
        },
    }
}

/// Longitude speed by central difference over ±0.5 day, degrees/day.
pub fn longitude_speed(graha: Graha, jd: f64) -> f64 {
    let before = tropical_position(graha, julian_centuries(jd - SPEED_HALF_STEP_DAYS)).longitude;
    let after = tropical_position(graha, julian_centuries(jd + SPEED_HALF_STEP_DAYS)).longitude;
    let delta = (after - before + 180.0).rem_euclid(360.0) - 180.0;
    delta / (2.0 * SPEED_HALF_STEP_DAYS)
}

fn retrograde_flag(graha: Graha, jd: f64, speed: f64, model: RetrogradeModel) -> bool {
    match graha {
        Graha::Surya | Graha::Chandra => false,
        Graha::Rahu | Graha::Ketu => true,
        other => as_planet(other).is_some_and(|p| model.is_retrograde(p, jd, speed)),
    }
}

/// Compute the chart for a UT Julian Day and place.
pub fn chart_at(
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
    config: &EphemerisConfig,
) -> Result<BirthChart, EphemError> {
    validate_coordinates(latitude, longitude)?;
    if !jd_ut.is_finite() {
        return Err(EphemError::InvalidInput(format!("julian day {jd_ut} is not finite")));
    }

    let t = julian_centuries(jd_ut);
    let ayanamsa = lahiri_ayanamsa_deg(jd_ut);

    let mut positions: Vec<PlanetaryPosition> = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let pos = tropical_position(g, t);
            let speed = longitude_speed(g, jd_ut);
            PlanetaryPosition::new(
                ChartPoint::Graha(g),
                tropical_to_sidereal(pos.longitude, ayanamsa),
                pos.latitude,
                pos.distance,
                speed,
                retrograde_flag(g, jd_ut, speed, config.retrograde_model),
            )
        })
        .collect();

    let asc = ascendant(jd_ut, latitude, longitude, ayanamsa, &config.calibration);
    positions.push(PlanetaryPosition::new(
        ChartPoint::Ascendant,
        asc.calibrated,
        0.0,
        0.0,
        0.0,
        false,
    ));

    Ok(BirthChart {
        julian_day: jd_ut,
        ut: LocalDateTime::from_jd(jd_ut).to_string(),
        ayanamsa,
        positions,
    })
}

/// Compute the chart for a validated birth input.
pub fn calculate_chart(
    input: &BirthInput,
    config: &EphemerisConfig,
) -> Result<BirthChart, EphemError> {
    let jd_ut = input.local().to_jd_ut(config.utc_offset_hours)?;
    chart_at(jd_ut, input.latitude(), input.longitude(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai() -> BirthInput {
        BirthInput::parse("Test", "1990-01-15", "10:30", 13.0827, 80.2707, None).unwrap()
    }

    #[test]
    fn ten_points_one_ascendant() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        assert_eq!(chart.positions.len(), 10);
        let ascs = chart
            .positions
            .iter()
            .filter(|p| p.name == ChartPoint::Ascendant)
            .count();
        assert_eq!(ascs, 1);
        assert_eq!(chart.positions[9].name, ChartPoint::Ascendant);
    }

    #[test]
    fn julian_day_applies_ist_offset() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        // 1990-01-15 05:00 UT
        assert!((chart.julian_day - 2_447_906.708_333).abs() < 1e-5, "{}", chart.julian_day);
        assert_eq!(chart.ut, "1990-01-15T05:00:00");
    }

    #[test]
    fn sun_in_sidereal_capricorn_mid_january() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        let sun = chart.graha(Graha::Surya).unwrap();
        assert_eq!(sun.rashi, Rashi::Makara);
        assert!(sun.speed > 0.95 && sun.speed < 1.05, "sun speed {}", sun.speed);
        assert!(!sun.retrograde);
    }

    #[test]
    fn nodes_always_retrograde_and_opposite() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        let rahu = chart.graha(Graha::Rahu).unwrap();
        let ketu = chart.graha(Graha::Ketu).unwrap();
        assert!(rahu.retrograde && ketu.retrograde);
        assert!(rahu.speed < 0.0);
        let sep = (ketu.longitude - rahu.longitude).rem_euclid(360.0);
        assert!((sep - 180.0).abs() < 1e-9);
    }

    #[test]
    fn moon_speed_plausible() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        let moon = chart.graha(Graha::Chandra).unwrap();
        assert!(moon.speed > 11.0 && moon.speed < 16.0, "moon speed {}", moon.speed);
    }

    #[test]
    fn velocity_model_matches_speed_sign() {
        let config = EphemerisConfig {
            retrograde_model: RetrogradeModel::Velocity,
            ..EphemerisConfig::default()
        };
        let chart = calculate_chart(&chennai(), &config).unwrap();
        for g in [Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani] {
            let p = chart.graha(g).unwrap();
            assert_eq!(p.retrograde, p.speed < 0.0, "{g}");
        }
    }

    #[test]
    fn calibration_only_moves_ascendant() {
        let plain = EphemerisConfig {
            calibration: Calibration::none(),
            ..EphemerisConfig::default()
        };
        let a = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        let b = calculate_chart(&chennai(), &plain).unwrap();
        assert_eq!(a.positions[..9], b.positions[..9]);
        assert_ne!(a.ascendant().unwrap().longitude, b.ascendant().unwrap().longitude);
    }

    #[test]
    fn utc_offset_out_of_range_is_error() {
        let config = EphemerisConfig {
            utc_offset_hours: 20.0,
            ..EphemerisConfig::default()
        };
        assert!(matches!(calculate_chart(&chennai(), &config), Err(EphemError::Time(_))));
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(chart_at(f64::NAN, 0.0, 0.0, &EphemerisConfig::default()).is_err());
    }

    #[test]
    fn serializes_names() {
        let chart = calculate_chart(&chennai(), &EphemerisConfig::default()).unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["positions"][0]["name"], "Sun");
        assert_eq!(json["positions"][9]["name"], "Ascendant");
        assert!(json["positions"][0]["rashi"].is_string());
    }
}
