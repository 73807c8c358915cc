//! Integration tests for the Vimshottari timeline builder.

use chrono::{NaiveDate, NaiveDateTime};
use kundali_vedic::dasha::{DAYS_PER_YEAR, lord_years};
use kundali_vedic::{
    BalanceMode, DashaConfig, DashaStatus, Graha, SubPeriodMethod, VIMSHOTTARI,
    nakshatra_from_longitude, vimshottari_timeline,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Every starting nakshatra yields a 120-year cycle of nine distinct lords.
#[test]
fn cycle_is_120_years_for_every_nakshatra() {
    let birth = at(1990, 1, 15, 10, 30);
    let now = at(2026, 10, 19, 0, 0);
    for nak in 0..27u8 {
        let config = DashaConfig::default();
        let tl = vimshottari_timeline(birth, now, BalanceMode::FromBirth(nak), &config).unwrap();
        assert_eq!(tl.cycle.len(), 9);
        let total: f64 = tl.cycle.iter().map(|p| p.years).sum();
        assert!((total - 120.0).abs() < 1e-9, "nak {nak}: {total}");

        let mut lords: Vec<_> = tl.cycle.iter().map(|p| p.lord.index()).collect();
        lords.sort_unstable();
        lords.dedup();
        assert_eq!(lords.len(), 9);
    }
}

/// Exactly one mahadasha is current, and "now" lies inside it.
#[test]
fn exactly_one_current_mahadasha() {
    let birth = at(1985, 6, 1, 4, 0);
    let now = at(2026, 10, 19, 12, 0);
    let config = DashaConfig::default();
    let tl = vimshottari_timeline(birth, now, BalanceMode::MoonPosition(123.4), &config).unwrap();

    let current: Vec<_> = tl.cycle.iter().filter(|p| p.status == DashaStatus::Current).collect();
    assert_eq!(current.len(), 1);
    assert!(current[0].start <= now && now < current[0].end);
    assert_eq!(current[0], &tl.mahadasha);
}

/// Sub-periods nest inside their parent for both methods.
#[test]
fn sub_periods_nest() {
    let birth = at(1990, 1, 15, 10, 30);
    let now = at(2026, 10, 19, 0, 0);
    for method in [SubPeriodMethod::Proportional, SubPeriodMethod::ElapsedFraction] {
        let config = DashaConfig { sub_period_method: method };
        let balance = BalanceMode::MoonPosition(211.75);
        let tl = vimshottari_timeline(birth, now, balance, &config).unwrap();
        assert!(tl.antardasha.start >= tl.mahadasha.start);
        assert!(tl.antardasha.end <= tl.mahadasha.end);
        assert!(tl.pratyantardasha.start >= tl.antardasha.start);
        assert!(tl.pratyantardasha.end <= tl.antardasha.end);
        assert!(tl.pratyantardasha.start <= now && now < tl.pratyantardasha.end);
    }
}

/// Classical antardasha of Venus in Venus is 3 years 4 months.
#[test]
fn proportional_first_antardasha_length() {
    let birth = at(2000, 1, 1, 0, 0);
    // Bharani (index 1) begins a Venus mahadasha.
    let tl = vimshottari_timeline(birth, birth, BalanceMode::FromBirth(1), &DashaConfig::default())
        .unwrap();
    assert_eq!(tl.mahadasha.lord, Graha::Shukra);
    assert_eq!(tl.antardasha.lord, Graha::Shukra);
    assert!((tl.antardasha.years - 20.0 * 20.0 / 120.0).abs() < 1e-6);
}

/// Chennai, 1990-01-15 10:30 with a fixed "now": the lord comes from the
/// cycle and the remaining time is shorter than that lord's full period.
#[test]
fn chennai_remaining_time_is_bounded() {
    let birth = at(1990, 1, 15, 10, 30);
    let now = at(2024, 6, 1, 0, 0);
    let moon = nakshatra_from_longitude(211.75);
    let tl = vimshottari_timeline(
        birth,
        now,
        BalanceMode::FromBirth(moon.nakshatra_index),
        &DashaConfig::default(),
    )
    .unwrap();

    assert!(VIMSHOTTARI.iter().any(|(g, _)| *g == tl.mahadasha.lord));
    assert!(tl.remaining.as_years() >= 0.0);
    assert!(tl.remaining.as_years() < lord_years(tl.mahadasha.lord));
    assert!((tl.age_years - (now - birth).num_days() as f64 / DAYS_PER_YEAR).abs() < 0.01);
}
