//! Criterion micro-benchmarks for cursor traversal and net rendering.

use criterion::{criterion_group, criterion_main, Criterion};
use cubix_core::{Cell, FaceId, Vec2};
use cubix_engine::render_net;
use cubix_space::Surface;
use std::hint::black_box;

/// Benchmark: Walk one full axis loop (4 * 64 cells) on a 64x64 board.
fn bench_axis_loop_64(c: &mut Criterion) {
    let surface = Surface::new(64, Cell::Empty).unwrap();
    let face = FaceId::new(0).unwrap();
    let start = surface.cursor(face, 10, 20, Vec2::new(1, 0)).unwrap();

    c.bench_function("axis_loop_64", |b| {
        b.iter(|| {
            let mut it = start;
            for _ in 0..4 * 64 {
                it.advance().unwrap();
            }
            black_box(it);
        });
    });
}

/// Benchmark: Walk every diagonal from every cell of one face until it
/// closes or meets a corner, on an 8x8 board.
fn bench_diagonal_walks_8(c: &mut Criterion) {
    let surface = Surface::new(8, Cell::Empty).unwrap();
    let face = FaceId::new(3).unwrap();
    let mut starts = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            for step in [Vec2::new(1, 1), Vec2::new(1, -1)] {
                starts.push(surface.cursor(face, x, y, step).unwrap());
            }
        }
    }

    c.bench_function("diagonal_walks_8", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for start in &starts {
                let mut it = *start;
                loop {
                    it.advance().unwrap();
                    total += 1;
                    if it.is_null() || it == *start {
                        break;
                    }
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: Read every cell through `index_of` on a 32x32 board.
fn bench_indexed_reads_32(c: &mut Criterion) {
    let surface = Surface::new(32, Cell::Empty).unwrap();

    c.bench_function("indexed_reads_32", |b| {
        b.iter(|| {
            for face in FaceId::ALL {
                for y in 0..32 {
                    for x in 0..32 {
                        black_box(surface.get(face, x, y).unwrap());
                    }
                }
            }
        });
    });
}

/// Benchmark: Render the unfolded net of a 16x16 board.
fn bench_render_net_16(c: &mut Criterion) {
    let surface = Surface::new(16, Cell::Empty).unwrap();
    let centre = FaceId::new(0).unwrap();

    c.bench_function("render_net_16", |b| {
        b.iter(|| {
            let net = render_net(&surface, centre).unwrap();
            black_box(net);
        });
    });
}

criterion_group!(
    benches,
    bench_axis_loop_64,
    bench_diagonal_walks_8,
    bench_indexed_reads_32,
    bench_render_net_16
);
criterion_main!(benches);
