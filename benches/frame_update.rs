use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isometric_follow::config::Config;
use isometric_follow::core::{Direction, KeyState};
use isometric_follow::movement::{frame_displacement, MOVE_SPEED};
use isometric_follow::renderer::ground_plane;
use isometric_follow::scene::World;
use isometric_follow::updater::TransformUpdater;

/// Key combinations worth measuring, from idle to everything held
fn key_sets() -> Vec<(&'static str, KeyState)> {
    vec![
        ("idle", KeyState::new()),
        ("forward", KeyState::holding(&[Direction::Forward])),
        ("diagonal", KeyState::holding(&[Direction::Forward, Direction::Left])),
        ("all", KeyState::holding(&Direction::ALL)),
    ]
}

/// Benchmark: displacement for one frame of input
fn bench_frame_displacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_displacement");
    for (name, keys) in key_sets() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &keys, |b, keys| {
            b.iter(|| black_box(frame_displacement(black_box(keys), MOVE_SPEED)))
        });
    }
    group.finish();
}

/// Benchmark: full per-frame update of the tracked object and camera
fn bench_updater_step(c: &mut Criterion) {
    let config = Config::default();
    let updater = TransformUpdater::new(&config);
    let keys = KeyState::holding(&[Direction::Forward, Direction::Right]);

    let mut group = c.benchmark_group("updater_step");

    group.bench_function("with_model", |b| {
        let mut world = World::new(&config, 16.0 / 9.0);
        world.install("block");
        b.iter(|| updater.step(black_box(&keys), &mut world))
    });

    group.bench_function("without_model", |b| {
        let mut world = World::new(&config, 16.0 / 9.0);
        b.iter(|| updater.step(black_box(&keys), &mut world))
    });

    group.finish();
}

/// Benchmark: camera matrices that get uploaded every frame
fn bench_view_projection(c: &mut Criterion) {
    let config = Config::default();
    let mut world = World::new(&config, 16.0 / 9.0);
    world.install("block");

    c.bench_function("view_projection", |b| {
        b.iter(|| black_box(world.camera.to_uniform()))
    });
}

/// Benchmark: building the ground mesh at different sizes
fn bench_ground_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("ground_plane");
    for size in [10.0f32, 100.0, 1000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(ground_plane(size, -1.0, [0.1, 0.5, 0.1])))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_frame_displacement,
    bench_updater_step,
    bench_view_projection,
    bench_ground_plane
);
criterion_main!(benches);
