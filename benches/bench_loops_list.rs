use criterion::{criterion_group, criterion_main, Criterion};
use loops_bench::scan::VARIANTS;
use loops_bench::{Fixture, DEFAULT_SIZE};
use std::hint::black_box;
use std::time::Duration;

fn benchmark_loops_list(c: &mut Criterion) {
    // Built once, outside the timed closures.
    let fixture = Fixture::random(DEFAULT_SIZE);

    let mut group = c.benchmark_group("loops_list");
    for (name, scan) in VARIANTS {
        group.bench_function(*name, |b| b.iter(|| black_box(scan(black_box(&fixture)))));
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(5));
    targets = benchmark_loops_list
}
criterion_main!(benches);
