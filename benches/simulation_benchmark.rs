/*
 * Worm Effect Benchmark
 *
 * Measures the per-frame simulation step and the pointer collision pass at
 * several population sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use worm_effect::palette::Palette;
use worm_effect::simulation::{collide, step, SimulationState, StepConfig};

// A state whose population has already filled up to `target`
fn populated_state(target: usize, rng: &mut StdRng) -> (SimulationState, StepConfig) {
    let mut state = SimulationState::new(vec2(1920.0, 1080.0), Palette::for_theme(true));
    let config = StepConfig {
        target_population: target,
        base_speed: 1.0,
    };
    for _ in 0..(target * 40) {
        step(&mut state, &config, rng);
    }
    (state, config)
}

// Benchmark the per-frame step
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for target in [15usize, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(target), target, |b, &n| {
            let mut rng = StdRng::seed_from_u64(1);
            let (mut state, config) = populated_state(n, &mut rng);

            b.iter(|| {
                step(black_box(&mut state), &config, &mut rng);
            });
        });
    }

    group.finish();
}

// Benchmark the collision pass with a pointer that touches nothing
fn bench_collision(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision");

    for target in [15usize, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(target), target, |b, &n| {
            let mut rng = StdRng::seed_from_u64(2);
            let (mut state, _) = populated_state(n, &mut rng);
            let mut out = Vec::new();

            b.iter(|| {
                collide(&mut state.worms, black_box(pt2(-1000.0, -1000.0)), &mut out, &mut rng)
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_collision
}

criterion_main!(benches);
