use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_time::{CivilDateTime, J2000_JD, MonthYear};
use jyoti_vedic_base::dasha::current_dasha_at;
use jyoti_vedic_base::{
    DashaLevel, Graha, MoonProfile, Nakshatra, Rashi, SaturnTransitTable, approximate_raw_positions,
    ashtakoot_score, equal_house_cusps, house_from_cusps, nakshatra_birth_balance,
    nakshatra_from_longitude, rashi_from_longitude, sade_sati_at, vimshottari_timeline,
};

fn mapping_bench(c: &mut Criterion) {
    let lon = 123.456;
    let cusps = equal_house_cusps(347.5);

    let mut group = c.benchmark_group("mapping");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("house_from_cusps", |b| {
        b.iter(|| house_from_cusps(black_box(lon), black_box(&cusps)))
    });
    group.bench_function("nakshatra_from_name", |b| {
        b.iter(|| Nakshatra::from_name(black_box("Purva Ashadha")))
    });
    group.finish();
}

fn ashtakoot_bench(c: &mut Criterion) {
    let a = MoonProfile::from_names("Taurus", "Rohini");
    let b_profile = MoonProfile::from_names("Scorpio", "Jyeshtha");

    let mut group = c.benchmark_group("ashtakoot");
    group.bench_function("score", |b| {
        b.iter(|| ashtakoot_score(black_box(&a), black_box(&b_profile)))
    });
    group.bench_function("profile_from_names", |b| {
        b.iter(|| MoonProfile::from_names(black_box("Vrishabha"), black_box("rohini")))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let balance = nakshatra_birth_balance(46.2);

    let mut group = c.benchmark_group("dasha");
    group.bench_function("current_dasha_at", |b| {
        b.iter(|| current_dasha_at(Graha::Chandra, black_box(4.1), black_box(87.3)))
    });
    group.bench_function("timeline_antardasha", |b| {
        b.iter(|| vimshottari_timeline(black_box(&balance), DashaLevel::Antardasha))
    });
    group.bench_function("timeline_pratyantardasha", |b| {
        b.iter(|| vimshottari_timeline(black_box(&balance), DashaLevel::Pratyantardasha))
    });
    group.finish();
}

fn transit_bench(c: &mut Criterion) {
    let table = SaturnTransitTable::builtin();
    let at = MonthYear::new(2031, 4);
    let now = CivilDateTime::utc(2026, 3, 1, 12, 0);

    let mut group = c.benchmark_group("transit");
    group.bench_function("approximate_raw_positions", |b| {
        b.iter(|| approximate_raw_positions(black_box(J2000_JD + 9000.5)))
    });
    if let Ok(now) = now {
        group.bench_function("civil_to_jd", |b| b.iter(|| black_box(&now).to_jd_utc()));
    }
    if let Ok(at) = at {
        group.bench_function("sade_sati_at", |b| {
            b.iter(|| sade_sati_at(&table, black_box(Rashi::Makara), black_box(at)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    mapping_bench,
    ashtakoot_bench,
    dasha_bench,
    transit_bench
);
criterion_main!(benches);
