//! Civil time handling for kundali calculations.
//!
//! This crate provides:
//! - `YYYY-MM-DD` / `HH:MM[:SS]` parsing into [`LocalDateTime`]
//! - Julian Date ↔ Gregorian calendar conversions
//! - Greenwich/local sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{IST_OFFSET_HOURS, LocalDateTime, parse_date, parse_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, JD_1900, calendar_to_jd, jd_to_calendar, julian_centuries,
};
pub use sidereal::{gast_deg, gmst_deg, local_sidereal_time_deg};
