use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use polyturn::polygon::{Polygon, PolygonSource, RegularPolygon};

/// Open spiral path, every edge a little longer than the previous one.
fn spiral(edge_count: usize) -> Polygon<f64> {
    let edges: Vec<f64> = (0..edge_count).map(|i| 1.0 + i as f64 * 0.1).collect();
    Polygon::new(edges, vec![17.0; edge_count]).unwrap()
}

fn bench_brute_force_diameter(b: &mut Bencher, polygon: &Polygon<f64>) {
    b.iter(|| polygon.diameter().unwrap())
}

fn bench_regular_diameter(b: &mut Bencher, polygon: &RegularPolygon<f64>) {
    b.iter(|| polygon.diameter().unwrap())
}

fn diameter_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_diameter");
    let edge_counts = &[10, 100, 1000];
    for &i in edge_counts {
        group.bench_with_input(BenchmarkId::new("spiral_brute_force", i), &i, |b, i| {
            bench_brute_force_diameter(b, &spiral(*i))
        });
        group.bench_with_input(BenchmarkId::new("regular_closed_form", i), &i, |b, i| {
            bench_regular_diameter(b, &RegularPolygon::new(*i, 1.0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(polygon_diameter, diameter_group,);
criterion_main!(polygon_diameter);
