//! Map a long weekend onto one of the planner's weekend-length presets.

use chrono::Weekday;
use serde::Serialize;

use crate::detector::LongWeekendSpan;

/// Fixed weekend-length presets offered by the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekendPreset {
    /// Saturday–Sunday.
    #[default]
    Regular,
    /// Friday–Sunday.
    Long,
    /// Friday–Monday.
    Extended,
    /// User-chosen days. Starts from the regular weekend.
    Custom,
}

impl WeekendPreset {
    /// The preset that fits a run of `duration` off-days.
    pub fn for_duration(duration: u32) -> Self {
        match duration {
            3 => WeekendPreset::Long,
            d if d >= 4 => WeekendPreset::Extended,
            _ => WeekendPreset::Regular,
        }
    }

    /// Days the preset schedules, in calendar order.
    pub fn default_days(self) -> &'static [Weekday] {
        match self {
            WeekendPreset::Long => &[Weekday::Fri, Weekday::Sat, Weekday::Sun],
            WeekendPreset::Extended => &[Weekday::Fri, Weekday::Sat, Weekday::Sun, Weekday::Mon],
            WeekendPreset::Regular | WeekendPreset::Custom => &[Weekday::Sat, Weekday::Sun],
        }
    }
}

/// What the schedule should switch to when the user plans a long weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekendPlan {
    pub preset: WeekendPreset,
    pub days: Vec<String>,
    pub note: String,
}

impl WeekendPlan {
    pub fn for_span(span: &LongWeekendSpan) -> Self {
        let preset = WeekendPreset::for_duration(span.duration);
        WeekendPlan {
            preset,
            days: preset
                .default_days()
                .iter()
                .map(|d| weekday_name(*d).to_string())
                .collect(),
            note: format!(
                "Planning {}-day weekend for {}",
                span.duration, span.trigger_holiday.name
            ),
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
