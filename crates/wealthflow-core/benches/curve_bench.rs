use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use wealthflow_core::curve::{area_path, monotone_x};
use wealthflow_core::geometry::Point;

fn gen_points(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, (i as f64 * 0.05).sin() * 100.0)).collect()
}

fn bench_monotone(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_x");
    for &n in &[100usize, 10_000, 100_000] {
        let pts = gen_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pts, |b, p| {
            b.iter(|| black_box(monotone_x(p)));
        });
    }
    group.finish();
}

fn bench_area(c: &mut Criterion) {
    let upper = gen_points(10_000);
    let lower = upper.iter().map(|p| Point::new(p.x, p.y - 50.0)).collect::<Vec<_>>();
    c.bench_function("area_path_10k", |b| {
        b.iter_batched(
            || (upper.clone(), lower.clone()),
            |(u, l)| black_box(area_path(&u, &l)),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_monotone, bench_area);
criterion_main!(benches);
