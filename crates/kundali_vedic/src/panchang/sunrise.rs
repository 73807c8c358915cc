//! Approximate local sunrise and sunset.
//!
//! A linear model around the Indian standard meridian (82.5 deg E): every
//! degree west of it delays both events by 4 minutes, and distance from the
//! equator widens the day by 0.6 minutes per degree. Not a solar-position
//! computation; good only for display.

/// Standard meridian of Indian Standard Time, degrees east.
pub const STANDARD_MERIDIAN_DEG: f64 = 82.5;

const LATITUDE_HOURS_PER_DEG: f64 = 0.01;

/// Sunrise in decimal local hours.
pub fn sunrise_hours(latitude_deg: f64, longitude_deg: f64) -> f64 {
    6.0 + meridian_shift_hours(longitude_deg) + latitude_deg.abs() * LATITUDE_HOURS_PER_DEG
}

/// Sunset in decimal local hours.
pub fn sunset_hours(latitude_deg: f64, longitude_deg: f64) -> f64 {
    18.0 + meridian_shift_hours(longitude_deg) - latitude_deg.abs() * LATITUDE_HOURS_PER_DEG
}

fn meridian_shift_hours(longitude_deg: f64) -> f64 {
    (STANDARD_MERIDIAN_DEG - longitude_deg) / 15.0
}

/// Format decimal hours as "HH:MM", wrapping into [00:00, 24:00).
pub fn format_clock(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let m = total_minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", m / 60, m % 60)
}
