use chrono::{TimeZone, Utc};
use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quake_payout::algorithms::{
    compute_burning_cost, compute_yearly_payouts, distances, haversine_distance,
    haversine_distance_closed_form, measure_events, EARTH_RADIUS,
};
use quake_payout::core::{Event, GeoPoint, PayoutSchedule};

fn grid(n: usize) -> Vec<GeoPoint> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            GeoPoint::new(34.0 + (f * 0.37) % 3.0, 23.0 + (f * 0.53) % 5.0)
        })
        .collect()
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("haversine");
    let a = GeoPoint::new(35.0, 25.0);
    let b = GeoPoint::new(35.1691, 26.2152);

    group.bench_function("cosine_form", |bench| {
        bench.iter(|| haversine_distance(black_box(&a), black_box(&b), EARTH_RADIUS));
    });
    group.bench_function("closed_form", |bench| {
        bench.iter(|| haversine_distance_closed_form(black_box(&a), black_box(&b), EARTH_RADIUS));
    });

    group.finish();
}

fn bench_batch_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_distances");
    let site = GeoPoint::new(35.0, 25.0);

    for n in [100usize, 1_000, 10_000] {
        let points = grid(n);
        group.bench_with_input(BenchmarkId::new("distances", n), &points, |bench, points| {
            bench.iter(|| distances(black_box(&site), points, EARTH_RADIUS));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let site = GeoPoint::new(35.0, 25.0);
    let schedule =
        PayoutSchedule::from_columns(&[10.0, 50.0, 200.0], &[4.5, 5.5, 6.5], &[100.0, 75.0, 50.0]);

    // Roughly the size of a 200 km catalog query around Crete.
    let events: Vec<Event> = grid(750)
        .into_iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let year = 1900 + (i % 122) as i32;
            Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0)
                .single()
                .map(|t| Event::new(t, 4.5 + (i % 30) as f64 * 0.1, point))
        })
        .collect();

    group.bench_function("burning_cost_750_events", |bench| {
        bench.iter(|| {
            let measured = measure_events(&site, black_box(events.clone()), EARTH_RADIUS);
            let yearly = compute_yearly_payouts(&measured, &schedule);
            compute_burning_cost(&yearly, 1952, 2021)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_single_pair, bench_batch_distances, bench_pipeline);
criterion_main!(benches);
