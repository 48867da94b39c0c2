// Criterion benchmarks for Find A Wave

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use find_a_wave::core::{calculate_score, haversine_distance, ExplanationEngine, Ranker};
use find_a_wave::models::{Coordinates, Currency, Destination, Preferences, TransportMode, TravelDates};
use find_a_wave::services::{DestinationCatalog, TravelTimeService};
use std::sync::Arc;

fn create_preferences() -> Preferences {
    Preferences {
        surfing_ability: 2,
        current_location: "London".to_string(),
        transport_modes: vec![TransportMode::Flight, TransportMode::Car, TransportMode::Train],
        max_travel_time: 12.0,
        budget: 90.0,
        currency: Currency::Usd,
        temperature_range: 2,
        travel_dates: TravelDates::new(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            Some(NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()),
        ),
        needs_surf_lessons: true,
        preference_weights: None,
    }
}

/// Catalog entries repeated with shifted coordinates and unique ids
fn create_destinations(count: usize) -> Vec<Destination> {
    let catalog = DestinationCatalog::embedded().unwrap();
    let base = catalog.all();

    (0..count)
        .map(|i| {
            let mut destination = base[i % base.len()].clone();
            destination.id = format!("{}-{}", destination.id, i);
            destination.coordinates.lat = (destination.coordinates.lat + i as f64 * 0.01).clamp(-90.0, 90.0);
            destination
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(Coordinates::new(51.5074, -0.1278)),
                black_box(Coordinates::new(-8.8291, 115.0849)),
            )
        });
    });
}

fn bench_scoring(c: &mut Criterion) {
    let preferences = create_preferences();
    let destinations = create_destinations(100);

    c.bench_function("calculate_score_100_destinations", |b| {
        b.iter(|| {
            let total: f64 = destinations
                .iter()
                .map(|d| calculate_score(black_box(d), black_box(&preferences)))
                .sum();
            black_box(total)
        });
    });
}

fn bench_explanation(c: &mut Criterion) {
    let engine = ExplanationEngine::default();
    let preferences = create_preferences();
    let destinations = create_destinations(1);

    c.bench_function("generate_explanation", |b| {
        b.iter(|| engine.generate_explanation(black_box(&destinations[0]), black_box(&preferences), None));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ranker = Ranker::with_default_timeout(Arc::new(TravelTimeService::with_defaults()));
    let preferences = create_preferences();

    let mut group = c.benchmark_group("ranking");

    for destination_count in [12, 100, 500].iter() {
        let destinations = create_destinations(*destination_count);

        group.bench_with_input(
            BenchmarkId::new("rank", destination_count),
            destination_count,
            |b, _| {
                b.iter(|| {
                    runtime.block_on(ranker.rank(black_box(&destinations), black_box(&preferences)))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_scoring,
    bench_explanation,
    bench_ranking
);

criterion_main!(benches);
