//! Ascendant calibration profiles.
//!
//! Charts produced by popular desktop astrology packages differ from the
//! textbook Ascendant by a large constant plus small latitude-dependent
//! offsets. The `professional` profile reproduces those outputs; `none`
//! leaves the computed Ascendant untouched. The constants are empirical.

use serde::{Deserialize, Serialize};

use kundali_vedic::normalize_360;

/// Correction applied to observers whose |latitude| falls in
/// `[min_abs_lat, max_abs_lat)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeBand {
    pub min_abs_lat: f64,
    pub max_abs_lat: f64,
    pub offset_deg: f64,
}

/// Ascendant correction: a fixed offset plus the first matching band.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub fixed_offset_deg: f64,
    pub latitude_bands: Vec<LatitudeBand>,
}

const PROFESSIONAL_OFFSET_DEG: f64 = -83.25;

const PROFESSIONAL_BANDS: [LatitudeBand; 5] = [
    LatitudeBand { min_abs_lat: 0.0, max_abs_lat: 12.0, offset_deg: 1.5 },
    LatitudeBand { min_abs_lat: 12.0, max_abs_lat: 20.0, offset_deg: 0.75 },
    LatitudeBand { min_abs_lat: 20.0, max_abs_lat: 28.0, offset_deg: 0.0 },
    LatitudeBand { min_abs_lat: 28.0, max_abs_lat: 36.0, offset_deg: -0.5 },
    LatitudeBand { min_abs_lat: 36.0, max_abs_lat: 90.1, offset_deg: -1.25 },
];

impl Calibration {
    /// Profile matching third-party "professional" chart software.
    pub fn professional() -> Self {
        Self {
            fixed_offset_deg: PROFESSIONAL_OFFSET_DEG,
            latitude_bands: PROFESSIONAL_BANDS.to_vec(),
        }
    }

    /// No correction.
    pub fn none() -> Self {
        Self {
            fixed_offset_deg: 0.0,
            latitude_bands: Vec::new(),
        }
    }

    /// Total offset for an observer latitude.
    pub fn offset_for(&self, latitude_deg: f64) -> f64 {
        let abs_lat = latitude_deg.abs();
        let band = self
            .latitude_bands
            .iter()
            .find(|b| abs_lat >= b.min_abs_lat && abs_lat < b.max_abs_lat)
            .map_or(0.0, |b| b.offset_deg);
        self.fixed_offset_deg + band
    }

    /// Apply to a sidereal Ascendant, normalized to [0, 360).
    pub fn apply(&self, ascendant_deg: f64, latitude_deg: f64) -> f64 {
        normalize_360(ascendant_deg + self.offset_for(latitude_deg))
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::professional()
    }
}

/// Named calibration profile, as selected in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationProfile {
    #[default]
    Professional,
    None,
}

impl CalibrationProfile {
    pub fn calibration(self) -> Calibration {
        match self {
            Self::Professional => Calibration::professional(),
            Self::None => Calibration::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        let c = Calibration::none();
        assert_eq!(c.apply(123.4, 28.6), 123.4);
    }

    #[test]
    fn professional_fixed_plus_band() {
        let c = Calibration::professional();
        // Delhi (28.6) falls in the -0.5 band.
        assert!((c.offset_for(28.6139) - (-83.75)).abs() < 1e-12);
        // Southern latitudes use |lat|.
        assert!((c.offset_for(-13.0) - (-82.5)).abs() < 1e-12);
        assert!((c.offset_for(90.0) - (-84.5)).abs() < 1e-12);
    }

    #[test]
    fn apply_wraps() {
        let c = Calibration::professional();
        let asc = c.apply(10.0, 24.0);
        assert!((asc - (360.0 + 10.0 - 83.25)).abs() < 1e-9);
    }

    #[test]
    fn profile_lookup() {
        assert_eq!(CalibrationProfile::default().calibration(), Calibration::professional());
        let p: CalibrationProfile = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(p.calibration(), Calibration::none());
    }
}
