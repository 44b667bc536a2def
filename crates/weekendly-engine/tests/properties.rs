use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use weekendly_engine::{
    detect_long_weekends_with_options, grow_span, generate_suggestions, DetectOptions,
    HolidayCalendar, HolidayCategory, HolidayRecord, LongWeekendType, MIN_LONG_WEEKEND_DAYS,
};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A date in 2024–2026, the years the built-in table covers.
fn covered_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..1096).prop_map(|offset| base() + Days::new(offset))
}

/// A synthetic calendar of up to 40 holidays spread over 2030–2031.
fn synthetic_calendar() -> impl Strategy<Value = HolidayCalendar> {
    prop::collection::vec(0u64..730, 0..40).prop_map(|offsets| {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        HolidayCalendar::from_records(offsets.into_iter().enumerate().map(|(i, offset)| {
            HolidayRecord::new(
                format!("Holiday {i}"),
                start + Days::new(offset),
                HolidayCategory::Festival,
            )
        }))
    })
}

proptest! {
    #[test]
    fn day_off_iff_weekend_or_listed(d in covered_date()) {
        let calendar = HolidayCalendar::builtin();
        let weekend = matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
        let listed = calendar
            .holidays_for_year(d.year())
            .iter()
            .any(|h| h.date == d);
        prop_assert_eq!(calendar.is_day_off(d), weekend || listed);
    }

    #[test]
    fn grown_span_contains_its_date_and_is_maximal(d in covered_date()) {
        let calendar = HolidayCalendar::builtin();
        let (start, end) = grow_span(&calendar, d);
        prop_assert!(start <= d && d <= end);
        prop_assert!(!calendar.is_day_off(start.pred_opt().unwrap()));
        prop_assert!(!calendar.is_day_off(end.succ_opt().unwrap()));
    }

    #[test]
    fn detection_output_is_sorted_unique_and_classified(
        calendar in synthetic_calendar(),
        start_offset in 0u64..700,
        days_ahead in 0u32..300,
    ) {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap() + Days::new(start_offset);
        let options = DetectOptions { days_ahead };
        let spans = detect_long_weekends_with_options(&calendar, start, &options);

        for pair in spans.windows(2) {
            prop_assert!(pair[0].start_date < pair[1].start_date);
        }
        for span in &spans {
            prop_assert!(span.duration >= MIN_LONG_WEEKEND_DAYS);
            prop_assert_eq!(
                i64::from(span.duration),
                (span.end_date - span.start_date).num_days() + 1
            );
            let expected = if span.duration == 3 {
                LongWeekendType::Long
            } else {
                LongWeekendType::Extended
            };
            prop_assert_eq!(span.kind, expected);
            prop_assert!(span.contains(span.trigger_holiday.date));
        }
    }

    #[test]
    fn detection_is_deterministic(
        calendar in synthetic_calendar(),
        start_offset in 0u64..700,
    ) {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap() + Days::new(start_offset);
        let options = DetectOptions::default();
        let first = detect_long_weekends_with_options(&calendar, start, &options);
        let second = detect_long_weekends_with_options(&calendar, start, &options);
        prop_assert_eq!(&first, &second);

        let s1: Vec<_> = first.iter().map(generate_suggestions).collect();
        let s2: Vec<_> = second.iter().map(generate_suggestions).collect();
        prop_assert_eq!(s1, s2);
    }

    #[test]
    fn holidays_sharing_a_span_yield_one_entry(
        calendar in synthetic_calendar(),
        start_offset in 0u64..700,
    ) {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap() + Days::new(start_offset);
        let spans = detect_long_weekends_with_options(&calendar, start, &DetectOptions::default());
        let mut keys: Vec<_> = spans.iter().map(|s| s.key()).collect();
        let before = keys.len();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);
    }
}
