//! # weekendly-engine
//!
//! Holiday-aware long-weekend detection for the Weekendly planner.
//!
//! Given a fixed table of public holidays, the engine finds runs of three or
//! more consecutive days off (holidays plus adjacent weekends, chained
//! holidays included), classifies them, and attaches activity suggestions.
//! Every function is pure over an immutable [`HolidayCalendar`] and an
//! explicit "today"; nothing reads the system clock.
//!
//! ## Modules
//!
//! - [`calendar`] — Holiday tables, direct lookups, the off-day predicate
//! - [`detector`] — Span growth, deduplication and classification
//! - [`suggestions`] — Duration, festival and seasonal activity suggestions
//! - [`upcoming`] — Caller-facing queries with countdowns
//! - [`planning`] — Long weekend → weekend-length preset
//! - [`banner`] — Banner text for the next long weekend
//! - [`error`] — Error types

pub mod banner;
pub mod calendar;
pub mod detector;
pub mod error;
pub mod planning;
pub mod suggestions;
pub mod upcoming;

pub use banner::{BannerSummary, Urgency};
pub use calendar::{is_weekend, parse_date, HolidayCalendar, HolidayCategory, HolidayRecord};
pub use detector::{
    detect_long_weekends, detect_long_weekends_with_options, grow_span, DetectOptions,
    LongWeekendSpan, LongWeekendType, DEFAULT_DAYS_AHEAD, MIN_LONG_WEEKEND_DAYS,
};
pub use error::PlannerError;
pub use planning::{WeekendPlan, WeekendPreset};
pub use suggestions::generate_suggestions;
pub use upcoming::{
    days_until, today_in_timezone, upcoming_long_weekends_with_suggestions, UpcomingLongWeekend,
};
