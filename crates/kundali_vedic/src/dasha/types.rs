//! Core types for Vimshottari dasha (planetary period) calculations.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Year length for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Mean month length used for the remaining-time breakdown.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Length of the full Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The 9 Vimshottari lords in cycle order with their mahadasha years.
pub const VIMSHOTTARI: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }
}

/// Position of a period relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaStatus {
    Past,
    Current,
    Future,
}

/// A single dasha period with civil start/end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    pub level: DashaLevel,
    /// Inclusive.
    pub start: NaiveDateTime,
    /// Exclusive.
    pub end: NaiveDateTime,
    /// Duration in years (365.25-day years).
    pub years: f64,
    pub status: DashaStatus,
}

/// How the first mahadasha is anchored to the birth moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceMode {
    /// The birth nakshatra's lord begins a full period at birth.
    FromBirth(u8),
    /// Classical birth balance: the Moon's elapsed fraction of its
    /// nakshatra is treated as already-elapsed time of the first period.
    MoonPosition(f64),
}

/// How antardasha and pratyantardasha periods are derived from a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubPeriodMethod {
    /// Child length = parent × own years / 120, starting from the parent lord.
    #[default]
    Proportional,
    /// Parent split into nine equal slices; the active slice is chosen by
    /// the fraction of the parent already elapsed.
    ElapsedFraction,
}

/// Options for the timeline builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashaConfig {
    pub sub_period_method: SubPeriodMethod,
}

/// Time left in the current mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingTime {
    pub years: u32,
    pub months: u32,
}

impl RemainingTime {
    /// Break a day count into whole years and whole months.
    pub fn from_days(days: f64) -> Self {
        let days = days.max(0.0);
        let years = (days / DAYS_PER_YEAR).floor();
        let months = ((days - years * DAYS_PER_YEAR) / DAYS_PER_MONTH).floor();
        Self {
            years: years as u32,
            months: (months as u32).min(11),
        }
    }

    /// Total in fractional years.
    pub fn as_years(self) -> f64 {
        self.years as f64 + self.months as f64 * DAYS_PER_MONTH / DAYS_PER_YEAR
    }
}

/// Full dasha picture at a given "now".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub birth_nakshatra: Nakshatra,
    pub birth_lord: Graha,
    /// Age at "now" in 365.25-day years.
    pub age_years: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
    pub pratyantardasha: DashaPeriod,
    /// The nine mahadashas of the cycle that contains "now".
    pub cycle: Vec<DashaPeriod>,
    pub remaining: RemainingTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_sums_to_120() {
        let total: f64 = VIMSHOTTARI.iter().map(|(_, y)| y).sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn remaining_breakdown() {
        let r = RemainingTime::from_days(2.0 * DAYS_PER_YEAR + 3.5 * DAYS_PER_MONTH);
        assert_eq!(r, RemainingTime { years: 2, months: 3 });
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(RemainingTime::from_days(-10.0), RemainingTime { years: 0, months: 0 });
    }

    #[test]
    fn remaining_months_capped_at_eleven() {
        // 365.0 days is 0 years but 11.99 months.
        let r = RemainingTime::from_days(365.0);
        assert_eq!(r.years, 0);
        assert_eq!(r.months, 11);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DashaStatus::Current).unwrap(), "\"current\"");
    }
}
