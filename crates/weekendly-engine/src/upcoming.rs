//! Query-level operations for presentation code.
//!
//! Nothing here reads the system clock. Callers pass "today" as a civil date;
//! [`today_in_timezone`] derives one from an instant for a given IANA zone so
//! that table dates and "today" are compared as calendar dates, never as
//! timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::calendar::HolidayCalendar;
use crate::detector::{detect_long_weekends, LongWeekendSpan};
use crate::error::{PlannerError, Result};
use crate::suggestions::generate_suggestions;

/// A detected long weekend enriched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingLongWeekend {
    #[serde(flatten)]
    pub span: LongWeekendSpan,
    pub suggestions: Vec<String>,
    /// Whole days from "today" to the span's start (negative once started).
    pub days_until: i64,
}

/// The next `limit` long weekends in the default 90-day window from `today`,
/// each with suggestions and a countdown.
///
/// A `limit` of zero yields an empty list. A `limit` larger than the number
/// of detected spans yields all of them.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekendly_engine::calendar::HolidayCalendar;
/// use weekendly_engine::upcoming::upcoming_long_weekends_with_suggestions;
///
/// let calendar = HolidayCalendar::builtin();
/// let today = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let upcoming = upcoming_long_weekends_with_suggestions(&calendar, today, 3);
/// assert_eq!(upcoming[0].span.trigger_holiday.name, "Independence Day");
/// assert_eq!(upcoming[0].days_until, 14);
/// ```
pub fn upcoming_long_weekends_with_suggestions(
    calendar: &HolidayCalendar,
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingLongWeekend> {
    detect_long_weekends(calendar, today)
        .into_iter()
        .take(limit)
        .map(|span| UpcomingLongWeekend {
            suggestions: generate_suggestions(&span),
            days_until: days_until(today, span.start_date),
            span,
        })
        .collect()
}

/// Whole civil days from `today` to `date`.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// The civil date at instant `now` in the IANA timezone `timezone`.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidTimezone`] if the timezone name is not a
/// valid IANA timezone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weekendly_engine::upcoming::today_in_timezone;
///
/// // 20:00 UTC is already the next day in India
/// let now = Utc.with_ymd_and_hms(2025, 8, 14, 20, 0, 0).unwrap();
/// let today = today_in_timezone(now, "Asia/Kolkata").unwrap();
/// assert_eq!(today.to_string(), "2025-08-15");
/// ```
pub fn today_in_timezone(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| PlannerError::InvalidTimezone(format!("'{}'", s)))
}
