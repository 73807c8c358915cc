//! Truncated nutation in longitude and obliquity.
//!
//! Four-term series good to ~0.5" in Δψ and ~0.1" in Δε, which is well
//! below the precision of the analytic planet series it feeds.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22
//! (low-accuracy form).

/// Nutation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude (Δψ).
    pub delta_psi_deg: f64,
    /// Nutation in obliquity (Δε).
    pub delta_eps_deg: f64,
}

/// Compute nutation for `t` Julian centuries since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Longitude of the Moon's ascending node
    let omega = (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t * t).to_radians();
    // Mean longitudes of the Sun and Moon
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        delta_psi_deg: dpsi / 3600.0,
        delta_eps_deg: deps / 3600.0,
    }
}
