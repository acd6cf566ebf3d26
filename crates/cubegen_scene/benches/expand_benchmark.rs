//! Benchmark for full scene expansion.
//!
//! Run with: cargo bench --package cubegen_scene --bench expand_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cubegen_scene::{encode_base_location, SceneGraph};

fn benchmark_small_scene(c: &mut Criterion) {
    let args = encode_base_location("/root/world/geo/cubes", 16, Some(90.0))
        .expect("valid location");

    c.bench_function("expand_16_cubes", |b| {
        b.iter(|| black_box(SceneGraph::expand(black_box(&args))));
    });
}

fn benchmark_wide_fanout(c: &mut Criterion) {
    let cubes = 4096;
    let args = encode_base_location("/root/world/geo/cubes", cubes, Some(180.0))
        .expect("valid location");

    let mut group = c.benchmark_group("wide_fanout");
    group.throughput(Throughput::Elements(cubes as u64));
    group.sample_size(20);

    group.bench_function("expand_4096_cubes", |b| {
        b.iter(|| black_box(SceneGraph::expand(black_box(&args))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_small_scene, benchmark_wide_fanout);
criterion_main!(benches);
