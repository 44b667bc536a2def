//! Activity suggestions for a detected long weekend.
//!
//! Suggestions are plain strings built from three independent rule groups,
//! always concatenated in this order:
//!
//! 1. duration tier (four-plus days vs. exactly three),
//! 2. festival keywords found in the trigger holiday's name (every match, in
//!    [`FESTIVAL_RULES`] order),
//! 3. the season of the span's start date, tuned to the Indian climate.
//!
//! Nothing is deduplicated or ranked.

use chrono::Datelike;

use crate::detector::LongWeekendSpan;

const EXTENDED_SUGGESTIONS: [&str; 4] = [
    "Perfect time for a short vacation to hill stations or beaches",
    "Consider visiting heritage sites or exploring nearby states",
    "Plan a spiritual journey to temples or ashrams",
    "Organize a family reunion or wedding celebrations",
];

const LONG_SUGGESTIONS: [&str; 4] = [
    "Great for a weekend getaway to nearby cities",
    "Try adventure activities like trekking or river rafting",
    "Plan festival celebrations with family and friends",
    "Explore local cuisine and street food tours",
];

/// A festival rule: any of `keywords` in the lowercased holiday name adds `suggestions`.
pub struct FestivalRule {
    pub keywords: &'static [&'static str],
    pub suggestions: [&'static str; 3],
}

pub const FESTIVAL_RULES: [FestivalRule; 4] = [
    FestivalRule {
        keywords: &["diwali"],
        suggestions: [
            "Perfect time for home decoration and rangoli making",
            "Plan family gatherings and sweet exchanges",
            "Visit temples and attend cultural programs",
        ],
    },
    FestivalRule {
        keywords: &["holi"],
        suggestions: [
            "Organize color celebrations with friends and family",
            "Prepare traditional sweets like gujiya and thandai",
            "Visit parks for Holi celebrations",
        ],
    },
    FestivalRule {
        keywords: &["ganesh"],
        suggestions: [
            "Participate in Ganesh pandal visits",
            "Learn traditional arts and crafts",
            "Enjoy modak making and cultural performances",
        ],
    },
    FestivalRule {
        keywords: &["independence", "republic"],
        suggestions: [
            "Attend flag hoisting ceremonies",
            "Visit historical monuments and museums",
            "Organize patriotic movie marathons",
        ],
    },
];

// March–June
const SUMMER_SUGGESTIONS: [&str; 3] = [
    "Plan early morning or evening outdoor activities",
    "Visit hill stations to escape the heat",
    "Enjoy seasonal fruits like mangoes and watermelons",
];

// July–October
const MONSOON_SUGGESTIONS: [&str; 3] = [
    "Perfect weather for trekking in Western Ghats",
    "Enjoy hot pakoras and chai during rains",
    "Visit waterfalls and green landscapes",
];

// November–February
const WINTER_SUGGESTIONS: [&str; 3] = [
    "Ideal weather for outdoor festivals and events",
    "Plan picnics in gardens and parks",
    "Enjoy traditional winter foods and warm gatherings",
];

/// Build the suggestion list for a span.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekendly_engine::calendar::HolidayCalendar;
/// use weekendly_engine::detector::detect_long_weekends;
/// use weekendly_engine::suggestions::generate_suggestions;
///
/// let calendar = HolidayCalendar::builtin();
/// let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let spans = detect_long_weekends(&calendar, start);
/// let suggestions = generate_suggestions(&spans[0]);
/// assert!(suggestions.contains(&"Attend flag hoisting ceremonies".to_string()));
/// ```
pub fn generate_suggestions(span: &LongWeekendSpan) -> Vec<String> {
    let mut suggestions: Vec<&str> = Vec::new();

    suggestions.extend(duration_suggestions(span.duration));

    let name = span.trigger_holiday.name.to_lowercase();
    for rule in &FESTIVAL_RULES {
        if rule.keywords.iter().any(|k| name.contains(k)) {
            suggestions.extend(rule.suggestions);
        }
    }

    suggestions.extend(seasonal_suggestions(span.start_date.month0()));

    suggestions.into_iter().map(String::from).collect()
}

fn duration_suggestions(duration: u32) -> &'static [&'static str] {
    if duration >= 4 {
        &EXTENDED_SUGGESTIONS
    } else if duration == 3 {
        &LONG_SUGGESTIONS
    } else {
        &[]
    }
}

/// Seasonal bucket for a zero-based month (0 = January).
fn seasonal_suggestions(month0: u32) -> [&'static str; 3] {
    match month0 {
        2..=5 => SUMMER_SUGGESTIONS,
        6..=9 => MONSOON_SUGGESTIONS,
        _ => WINTER_SUGGESTIONS,
    }
}
