//! Benchmarks for FFD lattice evaluation
//!
//! Author: Moroya Sakamoto

use alice_ffd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn build(spans: [u32; 3]) -> Lattice {
    let mut lattice = Lattice::new();
    lattice
        .rebuild(Aabb::new(Vec3::ZERO, Vec3::splat(10.0)), spans)
        .unwrap();
    lattice
}

fn model_verts(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let f = i as f32 / count as f32;
            let a = f * 50.0;
            Vec3::new(
                5.0 + 4.0 * a.cos(),
                5.0 + 4.0 * a.sin(),
                10.0 * f,
            )
        })
        .collect()
}

fn bench_trivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_trivariate");

    for spans in [1u32, 2, 4, 8] {
        let lattice = build([spans; 3]);
        group.bench_with_input(BenchmarkId::from_parameter(spans), &lattice, |b, lattice| {
            b.iter(|| {
                eval_trivariate(
                    black_box(lattice),
                    black_box(0.3),
                    black_box(0.6),
                    black_box(0.9),
                )
            })
        });
    }

    group.finish();
}

fn bench_deform(c: &mut Criterion) {
    let mut group = c.benchmark_group("deform");

    let lattice = build([4, 4, 4]);
    let verts = model_verts(2048);
    let cache = DeformCache::bind(&lattice, &verts);
    group.throughput(Throughput::Elements(verts.len() as u64));

    group.bench_function("cached_serial", |b| {
        b.iter(|| deform(black_box(&lattice), black_box(&cache)))
    });

    group.bench_function("cached_parallel", |b| {
        b.iter(|| deform_parallel(black_box(&lattice), black_box(&cache)))
    });

    group.bench_function("one_shot_serial", |b| {
        b.iter(|| eval_world_batch(black_box(&lattice), black_box(&verts)))
    });

    group.finish();
}

fn bench_param_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_param_grid");

    let lattice = build([2, 2, 2]);
    let resolution = [16u32, 16, 16];
    let samples = 17u64 * 17 * 17;
    group.throughput(Throughput::Elements(samples));

    group.bench_function("16x16x16", |b| {
        b.iter(|| eval_param_grid(black_box(&lattice), black_box(resolution)).unwrap())
    });

    group.finish();
}

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");

    let lattice = build([4, 4, 4]);
    let verts = model_verts(2048);
    group.throughput(Throughput::Elements(verts.len() as u64));

    group.bench_function("deform_cache_bind", |b| {
        b.iter(|| DeformCache::bind(black_box(&lattice), black_box(&verts)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_trivariate,
    bench_deform,
    bench_param_grid,
    bench_bind
);
criterion_main!(benches);
