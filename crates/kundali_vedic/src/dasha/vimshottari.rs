//! Vimshottari timeline builder.
//!
//! The 120-year cycle is rooted at the lord of the birth nakshatra
//! (nakshatra index mod 9). The current mahadasha is found by walking the
//! cycle from that lord until cumulative duration exceeds the native's age;
//! ages beyond one cycle wrap around.

use chrono::{Duration, NaiveDateTime};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

use super::balance::birth_balance;
use super::subperiod::{Span, active_child, children};
use super::types::{
    BalanceMode, DAYS_PER_YEAR, DashaConfig, DashaLevel, DashaPeriod, DashaStatus, DashaTimeline,
    RemainingTime, VIMSHOTTARI, VIMSHOTTARI_TOTAL_YEARS,
};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Vimshottari lord of a nakshatra index (0 = Ashwini).
pub const fn vimshottari_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI[(nakshatra_index % 9) as usize].0
}

/// Mahadasha length of a lord in years (0 for a graha outside the cycle).
pub fn lord_years(lord: Graha) -> f64 {
    VIMSHOTTARI
        .iter()
        .find(|(g, _)| *g == lord)
        .map_or(0.0, |(_, y)| *y)
}

/// Position of a lord in the cycle (Ketu = 0).
pub fn cycle_position(lord: Graha) -> usize {
    VIMSHOTTARI.iter().position(|(g, _)| *g == lord).unwrap_or(0)
}

/// The nine mahadasha spans of one cycle starting at `origin_day`.
pub fn mahadasha_cycle(first_lord: Graha, origin_day: f64) -> Vec<Span> {
    let start = cycle_position(first_lord);
    let mut cursor = origin_day;
    (0..VIMSHOTTARI.len())
        .map(|i| {
            let (lord, years) = VIMSHOTTARI[(start + i) % VIMSHOTTARI.len()];
            let end = cursor + years * DAYS_PER_YEAR;
            let span = Span { lord, start_day: cursor, end_day: end };
            cursor = end;
            span
        })
        .collect()
}

/// Build the dasha timeline for a native born at `birth`, evaluated at `now`.
///
/// Fails when `now` precedes `birth` or a period boundary falls outside the
/// representable date range.
pub fn vimshottari_timeline(
    birth: NaiveDateTime,
    now: NaiveDateTime,
    balance: BalanceMode,
    config: &DashaConfig,
) -> Result<DashaTimeline, VedicError> {
    let age_ms = (now - birth).num_milliseconds();
    if age_ms < 0 {
        return Err(VedicError::InvalidInput("current date precedes birth"));
    }
    let age_days = age_ms as f64 / MS_PER_DAY;

    let bb = birth_balance(balance);
    let birth_lord = vimshottari_lord(bb.nakshatra_index);

    // Whole cycles elapsed since the (possibly pre-birth) cycle origin.
    let cycle_days = VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
    let origin = bb.cycle_origin_days();
    let cycles_done = ((age_days - origin) / cycle_days).floor().max(0.0);
    let cycle = mahadasha_cycle(birth_lord, origin + cycles_done * cycle_days);

    let maha_idx = cycle
        .iter()
        .position(|s| s.contains(age_days))
        .unwrap_or(cycle.len() - 1);
    let maha = cycle[maha_idx];

    let method = config.sub_period_method;
    let antars = children(&maha, method);
    let antar = antars[active_child(&maha, &antars, age_days, method)];
    let pratyantars = children(&antar, method);
    let pratyantar = pratyantars[active_child(&antar, &pratyantars, age_days, method)];

    let to_period = |span: &Span, level: DashaLevel, status: DashaStatus| {
        Ok::<_, VedicError>(DashaPeriod {
            lord: span.lord,
            level,
            start: offset(birth, span.start_day)?,
            end: offset(birth, span.end_day)?,
            years: span.duration_days() / DAYS_PER_YEAR,
            status,
        })
    };

    let periods = cycle
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let status = match i.cmp(&maha_idx) {
                std::cmp::Ordering::Less => DashaStatus::Past,
                std::cmp::Ordering::Equal => DashaStatus::Current,
                std::cmp::Ordering::Greater => DashaStatus::Future,
            };
            to_period(span, DashaLevel::Mahadasha, status)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DashaTimeline {
        birth_nakshatra: Nakshatra::from_index(bb.nakshatra_index),
        birth_lord,
        age_years: age_days / DAYS_PER_YEAR,
        mahadasha: periods[maha_idx].clone(),
        antardasha: to_period(&antar, DashaLevel::Antardasha, DashaStatus::Current)?,
        pratyantardasha: to_period(&pratyantar, DashaLevel::Pratyantardasha, DashaStatus::Current)?,
        cycle: periods,
        remaining: RemainingTime::from_days(maha.end_day - age_days),
    })
}

fn offset(birth: NaiveDateTime, days: f64) -> Result<NaiveDateTime, VedicError> {
    let ms = (days * MS_PER_DAY).round() as i64;
    birth
        .checked_add_signed(Duration::milliseconds(ms))
        .ok_or(VedicError::InvalidInput("dasha boundary outside supported date range"))
}
