//! Criterion benchmarks for polygon generation and document editing.
//! Sizes: documents of {10, 100, 1000} figures.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use ngondoc::{Document, Ngon, NgonKind};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_document(m: usize, seed: u64) -> Document {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut doc = Document::new();
    for _ in 0..m {
        let at = rng.gen_range(0..=doc.len());
        let n = [3, 4, 8][rng.gen_range(0..3)];
        let cx = rng.gen_range(-10.0..10.0);
        let cy = rng.gen_range(-10.0..10.0);
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        doc.add(at, n, cx, cy, cx + theta.cos(), cy + theta.sin())
            .unwrap();
    }
    doc
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngon");
    for kind in NgonKind::ALL {
        group.bench_function(BenchmarkId::new("new", kind.name()), |b| {
            b.iter(|| {
                let _p = Ngon::new(kind, Vector2::new(0.5, -0.5), Vector2::new(1.5, 0.25)).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    for &m in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("remove_undo", m), &m, |b, &m| {
            b.iter_batched(
                || random_document(m, 42),
                |mut doc| {
                    doc.remove(m / 2).unwrap();
                    doc.undo().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("total_area", m), &m, |b, &m| {
            let doc = random_document(m, 43);
            b.iter(|| doc.iter().map(Ngon::area).sum::<f64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_document);
criterion_main!(benches);
