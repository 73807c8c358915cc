use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic::{
    BalanceMode, DashaConfig, PanchangInput, SubPeriodMethod, ascendant_tropical_deg,
    lahiri_ayanamsa_deg, nakshatra_from_longitude, panchang, rashi_from_longitude,
    vimshottari_timeline,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("lahiri_ayanamsa", |b| {
        b.iter(|| lahiri_ayanamsa_deg(black_box(2_460_000.5)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_tropical_deg(black_box(211.75), black_box(28.6), black_box(23.44)))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let input = PanchangInput {
        sun_longitude: 270.5,
        moon_longitude: 211.75,
        julian_day: 2_447_907.7,
        latitude: 13.0827,
        longitude: 80.2707,
    };

    c.bench_function("panchang", |b| b.iter(|| panchang(black_box(&input))));
}

fn dasha_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid date");
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");

    let mut group = c.benchmark_group("dasha");
    for (label, method) in [
        ("proportional", SubPeriodMethod::Proportional),
        ("elapsed_fraction", SubPeriodMethod::ElapsedFraction),
    ] {
        let config = DashaConfig { sub_period_method: method };
        group.bench_function(label, |b| {
            b.iter(|| {
                vimshottari_timeline(
                    black_box(birth),
                    black_box(now),
                    BalanceMode::MoonPosition(black_box(211.75)),
                    &config,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, zodiac_bench, panchang_bench, dasha_bench);
criterion_main!(benches);
