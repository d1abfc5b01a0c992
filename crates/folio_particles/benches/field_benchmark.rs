//! Benchmark for the particle field frame.
//!
//! TARGET: a 4K frame (921 particles, O(n²) links) well under 4ms
//!
//! Run with: cargo bench --package folio_particles --bench field_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio_particles::{DrawList, ParticleField};
use folio_shared::{Size, Vec2};

const VIEWPORTS: [(u32, u32); 3] = [(1280, 720), (1920, 1080), (3840, 2160)];

fn benchmark_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tick");

    for &(width, height) in &VIEWPORTS {
        let mut field = ParticleField::with_seed(42);
        field.resize(Size::new(width, height));
        let mut surface = DrawList::new();
        let pointer = Some(Vec2::new(width as f32 * 0.5, height as f32 * 0.5));

        group.throughput(Throughput::Elements(field.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &pointer,
            |b, &pointer| {
                b.iter(|| black_box(field.tick(&mut surface, black_box(pointer))));
            },
        );
    }

    group.finish();
}

fn benchmark_resize(c: &mut Criterion) {
    let mut field = ParticleField::with_seed(42);

    c.bench_function("field_resize_1080p", |b| {
        b.iter(|| field.resize(black_box(Size::new(1920, 1080))));
    });
}

criterion_group!(benches, benchmark_tick, benchmark_resize);
criterion_main!(benches);
