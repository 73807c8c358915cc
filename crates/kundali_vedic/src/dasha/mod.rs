//! Vimshottari dasha (planetary period) calculations.
//!
//! A fixed 9-lord, 120-year cycle rooted at the birth nakshatra's lord,
//! resolved three levels deep (Mahadasha, Antardasha, Pratyantardasha)
//! against a caller-supplied "now".

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use subperiod::{Span, active_child, children};
pub use types::{
    BalanceMode, DAYS_PER_MONTH, DAYS_PER_YEAR, DashaConfig, DashaLevel, DashaPeriod, DashaStatus,
    DashaTimeline, RemainingTime, SubPeriodMethod, VIMSHOTTARI, VIMSHOTTARI_TOTAL_YEARS,
};
pub use vimshottari::{
    cycle_position, lord_years, mahadasha_cycle, vimshottari_lord, vimshottari_timeline,
};
