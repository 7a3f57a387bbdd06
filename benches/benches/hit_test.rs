// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test cost against registries of growing size.
//!
//! Regions are laid out as a grid of 48x32 buttons with 8px gutters, so some probes land in
//! gutters and miss. Resolution is a linear front-to-back walk, so the interesting number is how
//! it scales with the region count.

use core::time::Duration;
use criterion::measurement::WallTime;
use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use tactile_region::{Rect, Region, RegionKind, Registry};

const CELL_W: i32 = 56;
const CELL_H: i32 = 40;
const COLUMNS: i32 = 8;

fn grid(count: usize) -> Registry<usize> {
    let mut registry = Registry::new();
    for i in 0..count {
        let (col, row) = cell(i);
        let (x, y) = (col * CELL_W, row * CELL_H);
        let kind = if i % 4 == 3 {
            RegionKind::Slider
        } else {
            RegionKind::Button
        };
        registry.include(Region::new(Rect::new(x, y, x + 47, y + 31), kind, i));
    }
    registry
}

fn cell(i: usize) -> (i32, i32) {
    let i = i32::try_from(i).unwrap_or(i32::MAX);
    (i % COLUMNS, i / COLUMNS)
}

/// Deterministic probe points spread across the populated area.
fn probes(count: usize) -> Vec<(i32, i32)> {
    let (_, rows) = cell(count);
    let height = (rows + 1) * CELL_H;
    let width = COLUMNS * CELL_W;
    let mut state = 0x2545_f491_u32;
    (0..256)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let x = i32::try_from(state % 65_536).unwrap_or(0) % width;
            let y = i32::try_from(state >> 16).unwrap_or(0) % height;
            (x, y)
        })
        .collect()
}

fn bench_resolve(g: &mut BenchmarkGroup<'_, WallTime>, count: usize) {
    let registry = grid(count);
    let pts = probes(count);
    g.bench_with_input(BenchmarkId::new("resolve", count), &registry, |b, registry| {
        b.iter(|| {
            for &(x, y) in &pts {
                black_box(registry.resolve(black_box(x), black_box(y)));
            }
        });
    });
}

fn bench_churn(g: &mut BenchmarkGroup<'_, WallTime>, count: usize) {
    g.bench_with_input(BenchmarkId::new("remove_reinclude", count), &count, |b, &count| {
        b.iter_batched(
            || {
                let registry = grid(count);
                let keys: Vec<_> = registry.iter().map(|(key, _)| key).step_by(3).collect();
                (registry, keys)
            },
            |(mut registry, keys)| {
                for key in keys {
                    if let Some(region) = registry.remove(key) {
                        registry.include(region);
                    }
                }
                black_box(registry.len())
            },
            BatchSize::SmallInput,
        );
    });
}

fn hit_test(c: &mut Criterion) {
    let mut g = c.benchmark_group("hit_test");
    g.warm_up_time(Duration::from_secs(1));
    g.measurement_time(Duration::from_secs(3));
    for count in [8, 64, 512] {
        bench_resolve(&mut g, count);
        bench_churn(&mut g, count);
    }
    g.finish();
}

criterion_group!(benches, hit_test);
criterion_main!(benches);
