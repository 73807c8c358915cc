//! Retrograde flags.
//!
//! Two models:
//! - `SynodicCycle`: a planet is retrograde while it sits within a fixed
//!   window around the midpoint of its retrograde loop (inferior
//!   conjunction for Mercury/Venus, opposition for the outer planets),
//!   located by its phase in the mean synodic period counted from a
//!   reference epoch.
//! - `Velocity`: retrograde exactly when the longitude speed is negative.
//!
//! Under both models the nodes are always retrograde and the luminaries
//! never are.

use serde::{Deserialize, Serialize};

use crate::planets::Planet;

/// How the retrograde flag is decided for the five planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrogradeModel {
    #[default]
    SynodicCycle,
    Velocity,
}

/// Mean synodic period (days), retrograde span (days), and a JD (UT) at the
/// middle of one retrograde loop.
const fn synodic(planet: Planet) -> (f64, f64, f64) {
    match planet {
        // Inferior conjunction 2019-11-11 (transit of Mercury).
        Planet::Mercury => (115.88, 22.0, 2_458_799.14),
        // Inferior conjunction 2012-06-06 (transit of Venus).
        Planet::Venus => (583.92, 42.0, 2_456_084.56),
        // Opposition 2003-08-28.
        Planet::Mars => (779.94, 72.0, 2_452_880.25),
        // Opposition 2023-11-03.
        Planet::Jupiter => (398.88, 121.0, 2_460_251.70),
        // Opposition 2023-08-27.
        Planet::Saturn => (378.09, 138.0, 2_460_183.84),
    }
}

/// Phase of `jd` within the planet's synodic cycle, [0, 1), where 0 is the
/// middle of a retrograde loop.
pub fn synodic_phase(planet: Planet, jd: f64) -> f64 {
    let (period, _, epoch) = synodic(planet);
    ((jd - epoch) / period).rem_euclid(1.0)
}

/// Synodic-cycle heuristic for one planet.
pub fn synodic_retrograde(planet: Planet, jd: f64) -> bool {
    let (period, span, _) = synodic(planet);
    let half_window = span / 2.0 / period;
    let phase = synodic_phase(planet, jd);
    phase < half_window || phase > 1.0 - half_window
}

impl RetrogradeModel {
    /// Retrograde flag for a planet at `jd` with longitude speed `speed`.
    pub fn is_retrograde(self, planet: Planet, jd: f64, speed: f64) -> bool {
        match self {
            Self::SynodicCycle => synodic_retrograde(planet, jd),
            Self::Velocity => speed < 0.0,
        }
    }
}
