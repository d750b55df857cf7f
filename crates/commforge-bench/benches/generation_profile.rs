//! End-to-end generation throughput on synthetic projects.

use commforge_bench::synthetic_project;
use commforge_study::{generate, validate_project, StudyConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_generate(c: &mut Criterion) {
    let config = StudyConfig::default();
    let mut group = c.benchmark_group("generate");
    for size in [10usize, 100, 500] {
        let project = synthetic_project(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &project, |b, project| {
            b.iter(|| generate(project, &config).unwrap());
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let config = StudyConfig::default();
    let project = synthetic_project(100);
    c.bench_function("validate_project/100", |b| {
        b.iter(|| validate_project(&project, &config));
    });
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
