//! Text for the "upcoming long weekend" banner.
//!
//! The banner features the first upcoming long weekend and mentions how many
//! more follow. Rendering is left to the caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::upcoming::UpcomingLongWeekend;

/// Suggestions shown on the banner.
pub const BANNER_SUGGESTIONS: usize = 3;

/// How close the featured long weekend is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// A week away or less.
    Urgent,
    /// Two weeks away or less.
    Soon,
    Upcoming,
}

impl Urgency {
    pub fn from_days_until(days: i64) -> Self {
        if days <= 7 {
            Urgency::Urgent
        } else if days <= 14 {
            Urgency::Soon
        } else {
            Urgency::Upcoming
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerSummary {
    /// e.g. "Independence Day - 3-day Weekend!"
    pub title: String,
    /// e.g. "15 Aug - 17 Aug"
    pub dates: String,
    /// "Today!", "Tomorrow!" or "N days away".
    pub countdown: String,
    pub urgency: Urgency,
    pub suggestions: Vec<String>,
    /// Long weekends after the featured one.
    pub more: usize,
}

impl BannerSummary {
    /// Summarize a list from
    /// [`upcoming_long_weekends_with_suggestions`](crate::upcoming::upcoming_long_weekends_with_suggestions).
    /// Returns `None` when there is nothing to show.
    pub fn from_upcoming(upcoming: &[UpcomingLongWeekend]) -> Option<Self> {
        let (first, rest) = upcoming.split_first()?;
        let span = &first.span;

        Some(BannerSummary {
            title: format!(
                "{} - {}-day Weekend!",
                span.trigger_holiday.name, span.duration
            ),
            dates: format!(
                "{} - {}",
                short_date(span.start_date),
                short_date(span.end_date)
            ),
            countdown: countdown(first.days_until),
            urgency: Urgency::from_days_until(first.days_until),
            suggestions: first
                .suggestions
                .iter()
                .take(BANNER_SUGGESTIONS)
                .cloned()
                .collect(),
            more: rest.len(),
        })
    }

    /// "N more long weekend(s) coming up", or `None` when there are none.
    pub fn more_text(&self) -> Option<String> {
        match self.more {
            0 => None,
            1 => Some("1 more long weekend coming up".to_string()),
            n => Some(format!("{n} more long weekends coming up")),
        }
    }
}

fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

fn countdown(days: i64) -> String {
    match days {
        0 => "Today!".to_string(),
        1 => "Tomorrow!".to_string(),
        n => format!("{n} days away"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{parse_date, HolidayCalendar};
    use crate::upcoming::upcoming_long_weekends_with_suggestions;

    fn upcoming(today: &str) -> Vec<UpcomingLongWeekend> {
        let calendar = HolidayCalendar::builtin();
        upcoming_long_weekends_with_suggestions(&calendar, parse_date(today).unwrap(), 5)
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(Urgency::from_days_until(0), Urgency::Urgent);
        assert_eq!(Urgency::from_days_until(7), Urgency::Urgent);
        assert_eq!(Urgency::from_days_until(8), Urgency::Soon);
        assert_eq!(Urgency::from_days_until(14), Urgency::Soon);
        assert_eq!(Urgency::from_days_until(15), Urgency::Upcoming);
    }

    #[test]
    fn test_banner_empty_is_none() {
        assert!(BannerSummary::from_upcoming(&[]).is_none());
    }

    #[test]
    fn test_banner_independence_day() {
        let banner = BannerSummary::from_upcoming(&upcoming("2025-08-01")).unwrap();
        assert_eq!(banner.title, "Independence Day - 3-day Weekend!");
        assert_eq!(banner.dates, "15 Aug - 17 Aug");
        assert_eq!(banner.countdown, "14 days away");
        assert_eq!(banner.urgency, Urgency::Soon);
        assert_eq!(banner.suggestions.len(), BANNER_SUGGESTIONS);
        assert_eq!(banner.more, 1);
        assert_eq!(
            banner.more_text().as_deref(),
            Some("1 more long weekend coming up")
        );
    }

    #[test]
    fn test_banner_countdown_today_and_tomorrow() {
        let today = BannerSummary::from_upcoming(&upcoming("2025-08-15")).unwrap();
        assert_eq!(today.countdown, "Today!");
        let tomorrow = BannerSummary::from_upcoming(&upcoming("2025-08-14")).unwrap();
        assert_eq!(tomorrow.countdown, "Tomorrow!");
        assert_eq!(tomorrow.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_banner_more_text_plural_and_none() {
        let banner = BannerSummary::from_upcoming(&upcoming("2025-03-01")).unwrap();
        assert_eq!(banner.more, 3);
        assert_eq!(
            banner.more_text().as_deref(),
            Some("3 more long weekends coming up")
        );

        let single = BannerSummary::from_upcoming(&upcoming("2025-10-01")).unwrap();
        assert_eq!(single.more, 0);
        assert!(single.more_text().is_none());
    }
}
