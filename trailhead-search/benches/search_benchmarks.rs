//! Criterion benchmarks for full search passes.
//!
//! Measures filter, sort and page selection over collections of increasing
//! size for each sort key.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package trailhead-search
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trailhead_core::{CategorySet, ScoredTrail, Trail};
use trailhead_search::{FilterState, FilterType, SearchPipeline, SortKey};

/// Collection sizes to benchmark.
const COLLECTION_SIZES: &[usize] = &[1_000, 10_000];

const DIFFICULTIES: &[&str] = &["easy", "intermediate", "advanced", "expert", "unknown"];
const REGIONS: &[&str] = &["Fiordland", "Nelson", "Canterbury", "Waikato"];

#[expect(clippy::float_arithmetic, reason = "scores scale with duration")]
fn generate_trails(count: usize) -> Vec<ScoredTrail> {
    DIFFICULTIES
        .iter()
        .cycle()
        .zip(REGIONS.iter().cycle())
        .zip(0_u32..)
        .take(count)
        .map(|((difficulty, region), index)| {
            let minutes = index.wrapping_mul(37).rem_euclid(600);
            ScoredTrail::new(
                Trail::new(u64::from(index), format!("Trail {}", index.wrapping_mul(7919)))
                    .with_difficulty(*difficulty)
                    .with_region(*region)
                    .with_minutes(minutes, minutes.saturating_add(60)),
                CategorySet::new(),
                f32::from(u16::try_from(minutes).unwrap_or(u16::MAX)) / 600.0,
            )
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let pipeline = SearchPipeline::default();
    let mut group = c.benchmark_group("search");

    for &size in COLLECTION_SIZES {
        let trails = generate_trails(size);
        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        for key in SortKey::ALL {
            let state = FilterState::new()
                .with_sort(key, true)
                .with_filter(FilterType::Region, "Fiordland,Nelson");
            group.bench_with_input(
                BenchmarkId::new(key.as_str(), size),
                &trails,
                |b, input| {
                    b.iter(|| black_box(pipeline.search(input, &state, 0)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
