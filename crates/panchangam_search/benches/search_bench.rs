use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchangam_search::{
    DateQuery, PanchangConfig, PanchangEngine, find_date, find_date_parallel, forecast,
};

fn panchang_bench(c: &mut Criterion) {
    let engine = match PanchangEngine::analytic(PanchangConfig::default()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Skipping benchmarks: {e}");
            return;
        }
    };
    let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap_or_default();

    let mut group = c.benchmark_group("panchang");
    group.bench_function("calculate", |b| {
        b.iter(|| engine.calculate(black_box(date)))
    });
    group.bench_function("masa_for_date", |b| {
        b.iter(|| engine.masa_for_date(black_box(date)))
    });
    group.bench_function("forecast_7_days", |b| {
        b.iter(|| forecast(&engine, black_box(date), 7))
    });
    group.finish();

    let query = DateQuery::new("Shravana", "Shukla", "Dashami").with_year(2024);
    let mut group = c.benchmark_group("reverse_search");
    group.sample_size(10);
    group.bench_function("find_date", |b| {
        b.iter(|| find_date(&engine, black_box(&query)))
    });
    group.bench_function("find_date_parallel", |b| {
        b.iter(|| find_date_parallel(&engine, black_box(&query)))
    });
    group.finish();
}

criterion_group!(benches, panchang_bench);
criterion_main!(benches);
