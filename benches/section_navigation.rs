// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for section navigation.
//!
//! Measures the performance of:
//! - A full transition cycle on the headless navigator
//! - Wheel bursts collapsing through the debounce timer
//! - Easing curve sampling used on every animation frame

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::navigator::{
    CubicBezier, InputEvent, NavKey, RecordingPanel, SectionNavigator, Timings,
};
use iced_folio::ui::navbar::LINKS;
use std::hint::black_box;

fn navigator() -> SectionNavigator<RecordingPanel> {
    SectionNavigator::new(RecordingPanel::stack(5), LINKS, Timings::default())
}

/// Benchmark one transition from request to released lock.
fn bench_transition_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_navigation");

    group.bench_function("transition_cycle", |b| {
        b.iter(|| {
            let mut nav = navigator();
            nav.handle_input(InputEvent::Key(NavKey::End), 0);
            nav.advance(50);
            nav.advance(800);
            black_box(nav.state());
        });
    });

    group.finish();
}

/// Benchmark a burst of wheel events collapsing into one transition.
fn bench_wheel_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_navigation");

    group.bench_function("wheel_burst", |b| {
        b.iter(|| {
            let mut nav = navigator();
            for now_ms in (0..200).step_by(5) {
                nav.handle_input(InputEvent::Wheel { delta_y: 40.0 }, now_ms);
                nav.advance(now_ms);
            }
            black_box(nav.advance(1_000));
        });
    });

    group.finish();
}

/// Benchmark easing evaluation across one second of 60 Hz frames.
fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");

    group.bench_function("section_curve_60_frames", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for frame in 0..60 {
                sum += CubicBezier::SECTION.sample(black_box(frame as f32 / 60.0));
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transition_cycle,
    bench_wheel_burst,
    bench_easing
);
criterion_main!(benches);
