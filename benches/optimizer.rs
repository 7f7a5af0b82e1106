use criterion::*;
use cut_optimizer_1d::*;

fn build_parts() -> Vec<Part> {
    let lengths = [2400.0, 1800.0, 1200.0, 900.0, 600.0, 450.0, 300.0];
    let mut parts = Vec::new();
    for (i, &length) in lengths.iter().enumerate() {
        parts.push(Part::new(format!("part-{i}"), length, 12));
    }
    parts
}

fn build_stocks() -> Vec<Stock> {
    vec![
        Stock::new("6m", 6000.0, StockQuantity::Unbounded),
        Stock::new("4m", 4000.0, StockQuantity::Unbounded),
        Stock::new("3m", 3000.0, StockQuantity::Unbounded),
    ]
}

fn benchmark_ffd(c: &mut Criterion) {
    let parts = build_parts();
    let stocks = build_stocks();
    let params = OptimizeParams {
        algorithm: Algorithm::Ffd,
        ..OptimizeParams::default()
    };
    c.bench_function("ffd synthetic demand", |b| {
        b.iter(|| optimize(&parts, &stocks, &params).unwrap())
    });
}

fn benchmark_hybrid(c: &mut Criterion) {
    let parts = build_parts();
    let stocks = build_stocks();
    let params = OptimizeParams {
        algorithm: Algorithm::Hybrid,
        ..OptimizeParams::default()
    };
    c.bench_function("hybrid synthetic demand", |b| {
        b.iter(|| optimize(&parts, &stocks, &params).unwrap())
    });
}

fn benchmark_smart_split(c: &mut Criterion) {
    let parts = build_parts();
    let stocks = build_stocks();
    let params = OptimizeParams {
        algorithm: Algorithm::SmartSplit,
        ..OptimizeParams::default()
    };
    c.bench_function("smart_split synthetic demand", |b| {
        b.iter(|| optimize(&parts, &stocks, &params).unwrap())
    });
}

criterion_group!(benches, benchmark_ffd, benchmark_hybrid, benchmark_smart_split);
criterion_main!(benches);
