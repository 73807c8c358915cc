//! Mean lunar nodes (Rahu/Ketu).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 47.7.

use kundali_vedic::normalize_360;

/// Mean longitude of the Moon's ascending node (Rahu), degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let mean = 125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
        - t4 / 60_616_000.0;
    normalize_360(mean)
}

/// Mean Ketu (descending node): always opposite Rahu.
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}
