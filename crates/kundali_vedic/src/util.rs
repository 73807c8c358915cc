//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// A tiny negative input rounds up to exactly 360 under `rem_euclid`; that
/// case folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Segment index of `value` for segments of width `span`, clamped into a
/// table of `len` entries.
///
/// Negative or NaN values land on 0; values past the last segment land on
/// `len - 1`. Lookup tables never see an out-of-bounds index.
pub fn clamped_index(value: f64, span: f64, len: usize) -> usize {
    let raw = (value / span).floor();
    if raw.is_nan() || raw < 0.0 {
        return 0;
    }
    (raw as usize).min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_wraps_full_turn() {
        assert!(normalize_360(360.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        for deg in [-1e-15, -1e-20, -f64::MIN_POSITIVE, -360.0 - 1e-13] {
            let n = normalize_360(deg);
            assert!((0.0..360.0).contains(&n), "{deg} -> {n}");
        }
        assert_eq!(normalize_360(-1e-15), 0.0);
    }

    #[test]
    fn clamped_index_inside() {
        assert_eq!(clamped_index(25.0, 12.0, 15), 2);
    }

    #[test]
    fn clamped_index_clamps_high() {
        assert_eq!(clamped_index(354.0, 12.0, 15), 14);
    }

    #[test]
    fn clamped_index_clamps_low_and_nan() {
        assert_eq!(clamped_index(-3.0, 12.0, 15), 0);
        assert_eq!(clamped_index(f64::NAN, 12.0, 15), 0);
    }

    #[test]
    fn clamped_index_empty_table() {
        assert_eq!(clamped_index(50.0, 1.0, 0), 0);
    }
}
