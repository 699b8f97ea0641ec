//! Benchmarks for deck construction and the structural self-check.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spotit_plane::{structural_diagnostics, Deck};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_build");

    for order in [2usize, 7, 13] {
        group.bench_function(format!("order_{order}"), |b| {
            b.iter(|| black_box(Deck::build(black_box(order))));
        });
    }

    group.finish();
}

fn bench_structural_scan(c: &mut Criterion) {
    let deck = Deck::build(7).expect("7 is prime").deck;

    c.bench_function("structural_scan_order_7", |b| {
        b.iter(|| black_box(structural_diagnostics(black_box(&deck))));
    });
}

criterion_group!(benches, bench_build, bench_structural_scan);
criterion_main!(benches);
