//! Benchmarks for the Clutch ambient background
//!
//! Run with: cargo bench

use clutch::ambient::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_particles(c: &mut Criterion) {
    let mut group = c.benchmark_group("particles");
    let theme = AmbientTheme::default();

    for width in [400.0, 1280.0, 2560.0] {
        let viewport = Viewport::new(width, 900.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = ParticlePool::new(viewport, &theme, &mut rng);

        group.throughput(Throughput::Elements(pool.len() as u64));

        group.bench_with_input(BenchmarkId::new("advance", width), &viewport, |b, v| {
            b.iter(|| pool.advance(black_box(*v), &mut rng))
        });

        group.bench_with_input(BenchmarkId::new("render", width), &viewport, |b, v| {
            let mut surface = RecordingSurface::frame_only(*v);
            b.iter(|| {
                surface.clear();
                pool.render(black_box(&mut surface));
            })
        });
    }

    group.finish();
}

fn bench_waves(c: &mut Criterion) {
    let mut group = c.benchmark_group("waves");
    let bands = WaveBand::defaults();

    for width in [400.0, 1280.0, 2560.0] {
        let mut surface = RecordingSurface::frame_only(Viewport::new(width, 900.0));
        let mut now = 0.0;

        group.bench_function(BenchmarkId::new("render", width), |b| {
            b.iter(|| {
                surface.clear();
                now += 16.0;
                render_waves(&mut surface, black_box(&bands), now);
            })
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    group.bench_function("full_1080p", |b| {
        let mut background: AmbientBackground<RecordingSurface, ManualHost> =
            AmbientBackground::with_rng(
                AmbientTheme::default(),
                ManualHost::new(),
                StdRng::seed_from_u64(7),
            );
        background.mount(
            Some(RecordingSurface::frame_only(Viewport::default())),
            Viewport::new(1920.0, 1080.0),
            0.0,
        );
        background.on_pointer_move(960.0, 540.0);

        let mut now = 0.0;
        b.iter(|| {
            now += 16.0;
            if let Some(generation) = background.host_mut().next_frame() {
                black_box(background.on_frame(generation, now));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_particles, bench_waves, bench_frame);
criterion_main!(benches);
