use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use weekendly_engine::{
    detect_long_weekends, detect_long_weekends_with_options, upcoming_long_weekends_with_suggestions,
    DetectOptions, HolidayCalendar,
};

fn bench_detection(c: &mut Criterion) {
    let calendar = HolidayCalendar::builtin();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    c.bench_function("detect_90_days", |b| {
        b.iter(|| detect_long_weekends(black_box(&calendar), black_box(start)))
    });

    let year = DetectOptions { days_ahead: 365 };
    c.bench_function("detect_365_days", |b| {
        b.iter(|| detect_long_weekends_with_options(black_box(&calendar), black_box(start), &year))
    });

    c.bench_function("upcoming_with_suggestions", |b| {
        b.iter(|| upcoming_long_weekends_with_suggestions(black_box(&calendar), black_box(start), 5))
    });
}

criterion_group!(benches, bench_detection);
criterion_main!(benches);
