// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the aurora background.
//!
//! Measures the per-frame cost of:
//! - Advancing the simulation by one step
//! - Rasterizing a frame at half of a 1080p window

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use polymorphl::aurora::{rasterize, AuroraSimulator};
use polymorphl::observable::Observable;
use polymorphl::ui::theming::ThemeMode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn running_simulator(theme: &Observable<ThemeMode>) -> AuroraSimulator {
    let mut simulator = AuroraSimulator::with_rng(theme, StdRng::seed_from_u64(42));
    simulator.mount(Size::new(1920.0, 1080.0));
    simulator
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("aurora");
    let theme = Observable::new(ThemeMode::Dark);
    let mut simulator = running_simulator(&theme);

    group.bench_function("step", |b| {
        b.iter(|| {
            simulator.step();
            black_box(simulator.orbs());
        });
    });

    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("aurora");

    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        let theme = Observable::new(mode);
        let simulator = running_simulator(&theme);
        let Some(plan) = simulator.frame_plan() else {
            continue;
        };
        group.bench_function(format!("rasterize_{mode}"), |b| {
            b.iter(|| black_box(rasterize(black_box(&plan))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_rasterize);
criterion_main!(benches);
