//! Long-weekend detection over a [`HolidayCalendar`].
//!
//! For every holiday inside the scan window, a span is grown outward one day
//! at a time while the neighbouring day is off (weekend or holiday). Adjacent
//! holidays and weekends are absorbed transitively, so a Friday holiday next
//! to a Monday holiday collapses into one four-day span. Spans shorter than
//! [`MIN_LONG_WEEKEND_DAYS`] are discarded.
//!
//! # Window limitation
//!
//! Only the tables for the window's start year and end year are scanned.
//! That is exact for windows up to a year long (the default is 90 days) but
//! skips any intervening year of a longer window.
//!
//! # Duplicates
//!
//! Several holidays inside one physical span each regrow the same
//! `(start, end)` pair. The first one met in table order is kept, and its
//! holiday becomes the span's trigger. That choice is arbitrary (it follows
//! table order, not holiday significance).

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::calendar::{HolidayCalendar, HolidayRecord};

/// Shortest run of off-days reported as a long weekend.
pub const MIN_LONG_WEEKEND_DAYS: u32 = 3;

/// Default scan horizon in days.
pub const DEFAULT_DAYS_AHEAD: u32 = 90;

/// Classification of an off-day run by its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LongWeekendType {
    /// Two days or fewer. Never surfaced by detection.
    Regular,
    /// Exactly three days.
    Long,
    /// Four days or more.
    Extended,
}

impl LongWeekendType {
    pub fn from_duration(duration: u32) -> Self {
        if duration >= 4 {
            LongWeekendType::Extended
        } else if duration == 3 {
            LongWeekendType::Long
        } else {
            LongWeekendType::Regular
        }
    }
}

/// A maximal run of consecutive off-days containing at least one holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongWeekendSpan {
    /// First off-day (inclusive).
    pub start_date: NaiveDate,
    /// Last off-day (inclusive).
    pub end_date: NaiveDate,
    /// Number of days in `start_date..=end_date`.
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: LongWeekendType,
    /// The holiday whose date led to this span being found.
    pub trigger_holiday: HolidayRecord,
}

impl LongWeekendSpan {
    /// Identity used for deduplication. The trigger holiday is not part of it.
    pub fn key(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }

    /// Whether `date` lies inside the span.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Options for [`detect_long_weekends_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Days after the start date to include in the scan window.
    pub days_ahead: u32,
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            days_ahead: DEFAULT_DAYS_AHEAD,
        }
    }
}

/// Grow the maximal off-day run around `date`.
///
/// `date` itself is always included, even when it is a working day. Growth
/// is not bounded by any scan window or by the calendar's covered years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekendly_engine::calendar::HolidayCalendar;
/// use weekendly_engine::detector::grow_span;
///
/// let calendar = HolidayCalendar::builtin();
/// // Independence Day 2025 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let (start, end) = grow_span(&calendar, friday);
/// assert_eq!(start, friday);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
/// ```
pub fn grow_span(calendar: &HolidayCalendar, date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let mut start = date;
    while let Some(prev) = start.pred_opt() {
        if !calendar.is_day_off(prev) {
            break;
        }
        start = prev;
    }

    let mut end = date;
    while let Some(next) = end.succ_opt() {
        if !calendar.is_day_off(next) {
            break;
        }
        end = next;
    }

    (start, end)
}

/// Inclusive day count of `start..=end`.
fn span_duration(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Detect long weekends in the 90 days following `start`.
///
/// See [`detect_long_weekends_with_options`].
pub fn detect_long_weekends(calendar: &HolidayCalendar, start: NaiveDate) -> Vec<LongWeekendSpan> {
    detect_long_weekends_with_options(calendar, start, &DetectOptions::default())
}

/// Detect long weekends touching the window `start..=start + days_ahead`.
///
/// # Returns
///
/// Unique spans of at least [`MIN_LONG_WEEKEND_DAYS`] days, sorted by start
/// date. A span may begin before the window or end after it; only its
/// trigger holiday has to fall inside. An empty list is a normal outcome.
pub fn detect_long_weekends_with_options(
    calendar: &HolidayCalendar,
    start: NaiveDate,
    options: &DetectOptions,
) -> Vec<LongWeekendSpan> {
    let end = start
        .checked_add_days(Days::new(u64::from(options.days_ahead)))
        .unwrap_or(NaiveDate::MAX);

    let years: BTreeSet<i32> = [start.year(), end.year()].into_iter().collect();

    let mut seen: HashSet<(NaiveDate, NaiveDate)> = HashSet::new();
    let mut spans = Vec::new();

    for year in years {
        for holiday in calendar.holidays_for_year(year) {
            if holiday.date < start || holiday.date > end {
                continue;
            }

            let (span_start, span_end) = grow_span(calendar, holiday.date);
            let duration = span_duration(span_start, span_end);

            if duration < MIN_LONG_WEEKEND_DAYS {
                trace!(
                    holiday = %holiday.name,
                    date = %holiday.date,
                    duration,
                    "off-day run too short"
                );
                continue;
            }

            if !seen.insert((span_start, span_end)) {
                debug!(
                    holiday = %holiday.name,
                    start = %span_start,
                    end = %span_end,
                    "span already found by an earlier holiday"
                );
                continue;
            }

            debug!(
                holiday = %holiday.name,
                start = %span_start,
                end = %span_end,
                duration,
                "long weekend found"
            );
            spans.push(LongWeekendSpan {
                start_date: span_start,
                end_date: span_end,
                duration,
                kind: LongWeekendType::from_duration(duration),
                trigger_holiday: holiday.clone(),
            });
        }
    }

    spans.sort_by_key(|s| s.start_date);
    spans
}
