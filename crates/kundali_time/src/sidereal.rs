//! Greenwich and local sidereal time.
//!
//! All functions take UT Julian Dates and return degrees in [0, 360).
//! The nutation terms for apparent sidereal time come from
//! `kundali_frames::nutation`; this module only applies them.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time at a UT Julian Date, in degrees.
///
/// θ0 = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    fold_360(theta)
}

/// Greenwich Apparent Sidereal Time in degrees.
///
/// Adds the equation of the equinoxes, Δψ·cos(ε), to GMST.
/// `delta_psi_deg` is nutation in longitude, `true_obliquity_deg` is ε.
pub fn gast_deg(jd_ut: f64, delta_psi_deg: f64, true_obliquity_deg: f64) -> f64 {
    let eq_eq = delta_psi_deg * true_obliquity_deg.to_radians().cos();
    fold_360(gmst_deg(jd_ut) + eq_eq)
}

/// Local Sidereal Time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    fold_360(greenwich_deg + longitude_east_deg)
}

// `rem_euclid` returns 360.0 for tiny negative inputs.
fn fold_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lst_tiny_negative_folds_to_zero() {
        assert_eq!(local_sidereal_time_deg(-1e-15, 0.0), 0.0);
        assert_eq!(local_sidereal_time_deg(10.0, -10.0 - 1e-15), 0.0);
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 52s ≈ 99.97°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.05, "GMST = {g}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 Apr 10, 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "GMST = {g}");
    }

    #[test]
    fn gast_adds_equation_of_equinoxes() {
        let jd = 2_446_895.5;
        let dpsi = -3.788 / 3600.0;
        let eps = 23.443_57;
        let diff = gast_deg(jd, dpsi, eps) - gmst_deg(jd);
        assert!((diff - dpsi * eps.to_radians().cos()).abs() < 1e-12);
    }

    #[test]
    fn lst_wraps() {
        assert!((local_sidereal_time_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
