//! Criterion benchmarks for categorisation and annotation.
//!
//! Compares the compiled keyword matcher against the naive per-keyword scan
//! and measures parallel annotation across collection sizes.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package trailhead-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]
#![expect(clippy::expect_used, reason = "benchmark fixtures are static")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trailhead_core::test_support::dictionary;
use trailhead_core::{
    CategoryDictionary, PreferenceDimension, PreferenceFlag, Trail, UserPreferences,
};
use trailhead_scorer::{KeywordCategorizer, ScoringSession, categorize};

/// Collection sizes to benchmark.
const COLLECTION_SIZES: &[usize] = &[100, 1_000, 10_000];

const PHRASES: &[&str] = &[
    "A gentle bush walk beside the river",
    "Steep alpine climb with rocky scree and a summit hut",
    "Coastal track past the beach and a historic lighthouse",
    "Family friendly boardwalk to the waterfall, wheelchair accessible",
    "Wetland reserve with native birds and wildlife viewing",
    "Urban promenade along the harbour",
];

fn bench_dictionary() -> CategoryDictionary {
    dictionary(&[
        ("Difficult", &["steep", "challenging", "strenuous"]),
        ("Rocky", &["rocky", "scree", "boulder"]),
        ("Forest", &["forest", "bush", "native"]),
        ("Reserve", &["reserve", "sanctuary", "park"]),
        ("Wet", &["river", "lake", "wetland", "stream"]),
        ("Beach", &["beach", "coast", "bay"]),
        ("Alpine", &["alpine", "summit", "mountain"]),
        ("Wildlife", &["bird", "wildlife", "seal"]),
        ("Historical", &["historic", "heritage", "lighthouse"]),
        ("Waterfall", &["waterfall", "falls", "cascade"]),
        ("FamilyFriendly", &["family", "gentle", "boardwalk"]),
        ("Accessible", &["wheelchair", "accessible", "pram"]),
    ])
}

fn bench_preferences() -> UserPreferences {
    UserPreferences::new()
        .with_level(PreferenceDimension::Bush, 4)
        .with_level(PreferenceDimension::Mountain, 3)
        .with_level(PreferenceDimension::Waterfall, 5)
        .with_flag(PreferenceFlag::FamilyFriendly, true)
}

fn generate_trails(count: usize) -> Vec<Trail> {
    PHRASES
        .iter()
        .cycle()
        .zip(0_u64..)
        .take(count)
        .map(|(phrase, id)| Trail::new(id, format!("Trail {id}")).with_description(*phrase))
        .collect()
}

fn bench_categorize(c: &mut Criterion) {
    let dictionary = bench_dictionary();
    let compiled = KeywordCategorizer::new(&dictionary).expect("compile dictionary");
    let trails = generate_trails(1_000);

    let mut group = c.benchmark_group("categorize");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("compiled", |b| {
        b.iter(|| {
            for trail in &trails {
                black_box(compiled.categorize(trail));
            }
        });
    });
    group.bench_function("naive", |b| {
        b.iter(|| {
            for trail in &trails {
                black_box(categorize(trail, &dictionary));
            }
        });
    });
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let session =
        ScoringSession::new(&bench_dictionary(), &bench_preferences()).expect("build session");

    let mut group = c.benchmark_group("annotate");
    for &size in COLLECTION_SIZES {
        let trails = generate_trails(size);
        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("trails", size), &trails, |b, input| {
            b.iter(|| black_box(session.annotate(input.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_categorize, bench_annotate);
criterion_main!(benches);
