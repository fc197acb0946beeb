//! Benchmarks for the bounding-box fill primitives.
//!
//! Run with: cargo bench -p bitpaint-render --bench raster_bench

use bitpaint_core::geometry::RectF;
use bitpaint_render::{CompositeMode, PixelBuffer, Raster, Rgb};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_fills(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster/fill");

    for (w, h) in [(320, 240), (800, 600), (1920, 1080)] {
        let pixels = w as u64 * h as u64;
        group.throughput(Throughput::Elements(pixels));
        let mut buf = PixelBuffer::new(w, h);
        let full = RectF::new(0.0, 0.0, w as f64, h as f64);

        group.bench_with_input(
            BenchmarkId::new("rectangle", format!("{w}x{h}")),
            &full,
            |b, r| {
                b.iter(|| {
                    buf.surface()
                        .fill_rectangle(CompositeMode::Set, Rgb::WHITE, *black_box(r));
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ellipse", format!("{w}x{h}")),
            &full,
            |b, r| {
                b.iter(|| {
                    buf.surface()
                        .fill_ellipse(CompositeMode::Set, Rgb::WHITE, *black_box(r));
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("triangle", format!("{w}x{h}")),
            &(w as f64, h as f64),
            |b, &(fw, fh)| {
                b.iter(|| {
                    buf.surface().fill_triangle(
                        CompositeMode::Xor,
                        Rgb::WHITE,
                        black_box((0.0, 0.0)),
                        black_box((fw, fh * 0.5)),
                        black_box((fw * 0.25, fh)),
                    );
                })
            },
        );
    }

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster/line");
    let mut buf = PixelBuffer::new(800, 600);

    for width in [1.0, 8.0, 30.0] {
        group.bench_with_input(BenchmarkId::new("diagonal", width), &width, |b, &lw| {
            b.iter(|| {
                buf.surface().fill_line(
                    CompositeMode::Set,
                    Rgb::new(0x7f, 0, 0x7f),
                    black_box((10.0, 20.0)),
                    black_box((780.0, 560.0)),
                    lw,
                );
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fills, bench_lines);
criterion_main!(benches);
