//! Benchmarks for field updates and form submission.
//!
//! These benchmarks measure the cost of the rule dispatch in the example forms.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldcheck::forms::complex::{complex_form_at, parse_birth_date};
use fieldcheck::forms::{AGE, BIRTH_DATE, NAME};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

fn bench_typing_name(c: &mut Criterion) {
    c.bench_function("complex_form_type_name_16_chars", |b| {
        b.iter(|| {
            let mut form = complex_form_at(reference_date());
            let mut name = String::new();
            for c in "Ada Lovelace Byr".chars() {
                name.push(c);
                form.update(NAME, black_box(name.as_str())).unwrap();
            }
            form
        })
    });
}

fn bench_submit_consistent(c: &mut Criterion) {
    c.bench_function("complex_form_submit_consistent", |b| {
        b.iter(|| {
            let mut form = complex_form_at(reference_date());
            form.update(NAME, "Ada").unwrap();
            form.update(AGE, "36").unwrap();
            form.update(BIRTH_DATE, "1990-05-01").unwrap();
            black_box(form.submit().unwrap())
        })
    });
}

fn bench_parse_birth_date(c: &mut Criterion) {
    c.bench_function("parse_birth_date", |b| {
        b.iter(|| parse_birth_date(black_box("1955-02-24")))
    });
}

criterion_group!(
    benches,
    bench_typing_name,
    bench_submit_consistent,
    bench_parse_birth_date
);
criterion_main!(benches);
