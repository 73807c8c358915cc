//! Lagna (Ascendant) and MC (Midheaven) from local sidereal time.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! rising and culminating points. Inputs are local (apparent) sidereal time,
//! geographic latitude and the obliquity of the ecliptic, all in degrees;
//! outputs are tropical longitudes in [0, 360).
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger.

use crate::util::normalize_360;

/// Tropical ecliptic longitude of the Ascendant.
///
/// `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
///
/// This quadrant-resolved form always returns the eastern intersection of
/// the ecliptic and horizon.
pub fn ascendant_tropical_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Tropical ecliptic longitude of the Midheaven.
///
/// `MC = atan2(sin θ, cos θ·cos ε)`
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}
