//! Ascendant for a UT instant and place.
//!
//! GMST → apparent sidereal time (equation of the equinoxes) → local
//! sidereal time → tropical Ascendant with the true obliquity → sidereal →
//! calibration.

use kundali_frames::{nutation, true_obliquity_deg};
use kundali_time::{gast_deg, julian_centuries, local_sidereal_time_deg};
use kundali_vedic::{ascendant_tropical_deg, midheaven_deg, tropical_to_sidereal};

use crate::calibration::Calibration;

/// Intermediate and final Ascendant values, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantDetail {
    pub local_sidereal_time: f64,
    pub true_obliquity: f64,
    pub tropical: f64,
    /// Sidereal Ascendant before calibration.
    pub sidereal: f64,
    /// Sidereal Ascendant after calibration; the value reported in charts.
    pub calibrated: f64,
    /// Tropical Midheaven.
    pub midheaven: f64,
}

pub fn ascendant(
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    ayanamsa_deg: f64,
    calibration: &Calibration,
) -> AscendantDetail {
    let t = julian_centuries(jd_ut);
    let nut = nutation(t);
    let eps = true_obliquity_deg(t, &nut);
    let gast = gast_deg(jd_ut, nut.delta_psi_deg, eps);
    let lst = local_sidereal_time_deg(gast, longitude_deg);

    let tropical = ascendant_tropical_deg(lst, latitude_deg, eps);
    let sidereal = tropical_to_sidereal(tropical, ayanamsa_deg);

    AscendantDetail {
        local_sidereal_time: lst,
        true_obliquity: eps,
        tropical,
        sidereal,
        calibrated: calibration.apply(sidereal, latitude_deg),
        midheaven: midheaven_deg(lst, eps),
    }
}
