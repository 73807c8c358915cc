//! Obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU 1980).

use crate::nutation::Nutation;

/// Mean obliquity at J2000.0: 23° 26' 21.448".
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = -46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64, nut: &Nutation) -> f64 {
    mean_obliquity_deg(t) + nut.delta_eps_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn decreases_with_time() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        let drift = mean_obliquity_deg(0.0) - mean_obliquity_deg(1.0);
        // ~47" per century
        assert!((drift * 3600.0 - 46.8).abs() < 0.1, "drift = {drift}");
    }

    #[test]
    fn true_adds_delta_eps() {
        let nut = Nutation {
            delta_psi_deg: 0.0,
            delta_eps_deg: 9.0 / 3600.0,
        };
        let diff = true_obliquity_deg(0.3, &nut) - mean_obliquity_deg(0.3);
        assert!((diff - 9.0 / 3600.0).abs() < 1e-15);
    }
}
