//! Vedic calculations on top of sidereal longitudes.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra vocabulary with static attributes
//! - Lahiri ayanamsa and tropical-to-sidereal conversion
//! - Lagna (Ascendant) and MC from local sidereal time
//! - Panchang (tithi, yoga, karan, nakshatra, weekday, sunrise/sunset)
//! - Vimshottari dasha timelines
//!
//! Everything here is a pure function of its inputs.

pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;

pub use ayanamsha::{
    LAHIRI_AT_1900_DEG, lahiri_ayanamsa_deg, tropical_to_sidereal, years_since_1900,
};
pub use dasha::{
    BalanceMode, DashaConfig, DashaLevel, DashaPeriod, DashaStatus, DashaTimeline, RemainingTime,
    SubPeriodMethod, VIMSHOTTARI, vimshottari_lord, vimshottari_timeline,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use lagna::{ascendant_tropical_deg, midheaven_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, Gana, NAKSHATRA_SPAN_27, Nadi, Nakshatra, NakshatraAttributes, NakshatraInfo,
    PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{PanchangInput, PanchangResult, panchang};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, Tatva, Varna, deg_to_dms, rashi_from_longitude};
pub use util::normalize_360;
