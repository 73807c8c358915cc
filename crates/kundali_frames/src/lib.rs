//! Ecliptic frame quantities for the analytic ephemeris.
//!
//! Provides the mean/true obliquity of the ecliptic, a four-term nutation
//! model and general precession in longitude, enough for sidereal-time and
//! ascendant work at the arc-second level.

pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use nutation::{Nutation, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_arcsec, general_precession_deg};
