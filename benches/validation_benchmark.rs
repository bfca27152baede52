// ============================================================================
// Validation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Pipeline - full validate() calls over representative inputs
// 2. Construction - parsing decimals of varying size
//
// The pipeline cost is O(digit count); the scientific-notation cases
// exercise the exponent-normalization multiply.
// ============================================================================

use bigdecimal_validator::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let validator = DecimalValidator::new();
    let rules = ValidationRules::default();

    let cases = [
        ("small", "124.2"),
        ("wide", "1234567890.12"),
        ("scientific", "1E8"),
        ("deep_fraction", "1E-88"),
    ];

    for (name, text) in cases {
        let value: BigDecimal = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("default_rules", name), &value, |b, value| {
            b.iter(|| black_box(validator.validate(Some(black_box(value)), &rules)));
        });
    }

    group.bench_function("absent_value", |b| {
        b.iter(|| black_box(validator.validate(None, &rules)));
    });

    group.finish();
}

fn benchmark_truncating_validator(c: &mut Criterion) {
    let validator = DecimalValidator::without_fraction_checks();
    let rules = ValidationRules::new()
        .with_max_fractional_digits(0)
        .with_max_value(1_000_000i64);
    let value: BigDecimal = "999999.999999".parse().unwrap();

    c.bench_function("validate/truncating", |b| {
        b.iter(|| black_box(validator.validate(Some(black_box(&value)), &rules)));
    });
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, text) in [
        ("plain", "124.2"),
        ("scientific", "1.7976931348623157E308"),
        ("long", "123456789012345678901234567890.123456789"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| black_box(text.parse::<BigDecimal>().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validate,
    benchmark_truncating_validator,
    benchmark_parsing
);
criterion_main!(benches);
