//! Birth balance: where in the cycle a native starts.
//!
//! With the Moon's longitude known, the fraction of its nakshatra already
//! traversed is the fraction of the first mahadasha already "spent" before
//! birth.

use crate::nakshatra::nakshatra_from_longitude;

use super::types::{BalanceMode, DAYS_PER_YEAR};
use super::vimshottari::{lord_years, vimshottari_lord};

/// Starting point of the cycle relative to birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0-based birth nakshatra index.
    pub nakshatra_index: u8,
    /// Fraction of the first mahadasha elapsed at birth, [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the first mahadasha remaining at birth.
    pub balance_days: f64,
}

impl BirthBalance {
    /// Offset (days, <= 0) from birth to the start of the first mahadasha.
    pub fn cycle_origin_days(&self) -> f64 {
        let first = lord_years(vimshottari_lord(self.nakshatra_index)) * DAYS_PER_YEAR;
        self.balance_days - first
    }
}

/// Resolve a balance mode into the birth nakshatra and elapsed fraction.
pub fn birth_balance(mode: BalanceMode) -> BirthBalance {
    let (nakshatra_index, elapsed_fraction) = match mode {
        BalanceMode::FromBirth(idx) => (idx.min(26), 0.0),
        BalanceMode::MoonPosition(moon_lon) => {
            let info = nakshatra_from_longitude(moon_lon);
            (info.nakshatra_index, info.fraction_elapsed)
        }
    };
    let first_days = lord_years(vimshottari_lord(nakshatra_index)) * DAYS_PER_YEAR;
    BirthBalance {
        nakshatra_index,
        elapsed_fraction,
        balance_days: first_days * (1.0 - elapsed_fraction),
    }
}
