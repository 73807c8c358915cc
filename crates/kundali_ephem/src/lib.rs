//! Sidereal birth-chart ephemeris.
//!
//! Computes the nine Vedic grahas and the Ascendant for a birth moment from
//! closed-form series: no kernel files, no I/O, deterministic output for a
//! given input.
//!
//! ```
//! use kundali_ephem::{BirthInput, EphemerisConfig, calculate_chart};
//!
//! let input = BirthInput::parse("A", "1990-01-15", "10:30", 13.0827, 80.2707, None)?;
//! let chart = calculate_chart(&input, &EphemerisConfig::default())?;
//! assert_eq!(chart.positions.len(), 10);
//! # Ok::<(), kundali_ephem::EphemError>(())
//! ```

pub mod ascendant;
pub mod calibration;
pub mod chart;
pub mod error;
pub mod input;
pub mod nodes;
pub mod planets;
pub mod retrograde;

pub use ascendant::{AscendantDetail, ascendant};
pub use calibration::{Calibration, CalibrationProfile, LatitudeBand};
pub use chart::{
    BirthChart, ChartPoint, EphemerisConfig, PlanetaryPosition, calculate_chart, chart_at,
    longitude_speed, tropical_position,
};
pub use error::EphemError;
pub use input::{BirthInput, validate_coordinates};
pub use nodes::{mean_ketu_deg, mean_rahu_deg};
pub use planets::{
    ALL_PLANETS, EclipticPosition, Planet, moon_position, planet_position, sun_position,
};
pub use retrograde::{RetrogradeModel, synodic_phase, synodic_retrograde};
