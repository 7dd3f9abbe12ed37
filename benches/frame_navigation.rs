// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for frame navigation.
//!
//! Measures the cost of:
//! - Wrapping direction arithmetic
//! - A full drag sweep through a loaded spinner

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_spin::media::FrameSet;
use iced_spin::{Bitmap, Direction, DragInput, Spinner, SpinnerOptions, Surface};
use std::hint::black_box;

/// Surface that only remembers the size, so the benchmark measures the
/// controller rather than a renderer.
#[derive(Default)]
struct NullSurface {
    size: (u32, u32),
}

impl Surface for NullSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn draw(&mut self, bitmap: &Bitmap) {
        black_box(bitmap);
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

fn frames(count: usize) -> FrameSet {
    let bitmaps = (0..count)
        .map(|_| Bitmap::from_rgba(8, 8, vec![0; 8 * 8 * 4]))
        .collect();
    FrameSet::new(bitmaps).unwrap()
}

fn bench_direction_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_navigation");

    group.bench_function("direction_apply", |b| {
        b.iter(|| {
            let mut current = 0;
            for _ in 0..360 {
                current = Direction::Forward.apply(black_box(current), 36);
            }
            black_box(current)
        });
    });

    group.finish();
}

fn bench_drag_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_navigation");

    for count in [36, 72, 180] {
        let mut spinner = Spinner::new(Vec::new(), NullSurface::default(), SpinnerOptions::default());
        spinner.on_frames_loaded(frames(count));
        spinner.handle_input(DragInput::Press);

        group.bench_with_input(BenchmarkId::new("drag_sweep", count), &count, |b, &count| {
            b.iter(|| {
                for _ in 0..count {
                    spinner.handle_input(DragInput::PointerMoved { delta_x: 2.0 });
                }
                black_box(spinner.current_frame())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_direction_apply, bench_drag_sweep);
criterion_main!(benches);
