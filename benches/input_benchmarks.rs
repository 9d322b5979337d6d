//! Performance benchmarks for the per-keystroke input rules.
//!
//! These run on every input event, so they should stay in the low
//! microseconds even for Persian-digit input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persian_form_input::domain::phone::format;
use persian_form_input::domain::{normalize_persian_digits, suggest_correction};
use persian_form_input::form::{assess_email, assess_phone};

fn bench_phone_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_format");

    for input in ["0912", "0912345", "09123456789", "02112345678", "091234567890123"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| format(black_box(input)));
        });
    }

    group.finish();
}

fn bench_assess_phone_persian(c: &mut Criterion) {
    c.bench_function("assess_phone_persian_digits", |b| {
        b.iter(|| assess_phone(black_box("۰۹۱۲ ۳۴۵ ۶۷۸۹")));
    });
}

fn bench_email(c: &mut Criterion) {
    c.bench_function("normalize_persian_digits", |b| {
        b.iter(|| normalize_persian_digits(black_box("ali۱۳۷۰٪gmail.com")));
    });

    c.bench_function("suggest_correction_typo", |b| {
        b.iter(|| suggest_correction(black_box("ali@hotmial.com")));
    });

    c.bench_function("suggest_correction_completion", |b| {
        b.iter(|| suggest_correction(black_box("ali@chmai")));
    });

    c.bench_function("assess_email_invalid", |b| {
        b.iter(|| assess_email(black_box("ali@gmail"), 5));
    });
}

criterion_group!(
    benches,
    bench_phone_format,
    bench_assess_phone_persian,
    bench_email
);
criterion_main!(benches);
