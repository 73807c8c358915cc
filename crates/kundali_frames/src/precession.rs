//! General precession in ecliptic longitude.
//!
//! Used to carry J2000-referred orbital elements onto the equinox of date.
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 21.5 (Lieske 1977).

/// Accumulated general precession in longitude since J2000.0, arcseconds.
///
/// `t` = Julian centuries since J2000.0.
pub fn general_precession_arcsec(t: f64) -> f64 {
    5029.0966 * t + 1.11113 * t * t - 0.000006 * t * t * t
}

/// Accumulated general precession in longitude since J2000.0, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}
