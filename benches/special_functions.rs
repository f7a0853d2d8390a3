// File: benches/special_functions.rs

use complexn::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn samples() -> Vec<(&'static str, ComplexNumber)> {
    vec![
        ("right_half", ComplexNumber::new(3.4, 2.3)),
        ("left_half", ComplexNumber::new(-1.5, 0.5)),
        ("steep", ComplexNumber::new(1.2, -4.1)),
    ]
}

fn bench_gamma_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_family");
    group.measurement_time(Duration::from_secs(5));

    for (name, z) in samples() {
        group.bench_with_input(BenchmarkId::new("gamma", name), &z, |b, z| {
            b.iter(|| black_box(z).gamma())
        });
        group.bench_with_input(BenchmarkId::new("ln_gamma", name), &z, |b, z| {
            b.iter(|| black_box(z).ln_gamma())
        });
        group.bench_with_input(BenchmarkId::new("fib", name), &z, |b, z| {
            b.iter(|| black_box(z).fib())
        });
    }
    group.bench_function("fact_exact_170", |b| {
        b.iter(|| complexn::real::fact(black_box(170.0)))
    });
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for (name, z) in samples() {
        group.bench_with_input(BenchmarkId::new("atanh", name), &z, |b, z| {
            b.iter(|| black_box(z).atanh())
        });
        group.bench_with_input(BenchmarkId::new("acosh", name), &z, |b, z| {
            b.iter(|| black_box(z).acosh())
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let options = FormatOptions::default();
    let z = ComplexNumber::new(1.2, -4.1);
    let mut group = c.benchmark_group("text");
    group.bench_function("format_cartesian", |b| {
        b.iter(|| black_box(z).to_string_with("I", &options))
    });
    group.bench_function("parse_cartesian", |b| {
        b.iter(|| black_box("1.2-4.1i").parse::<ComplexNumber>())
    });
    group.finish();
}

criterion_group!(special_function_benches, bench_gamma_family, bench_inverse, bench_text);
criterion_main!(special_function_benches);
