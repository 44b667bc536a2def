//! Holiday tables and the off-day predicate.
//!
//! A [`HolidayCalendar`] is an immutable year → holidays map. It owns no
//! detection logic; the detector and the query functions borrow it. The
//! compiled-in table ([`HolidayCalendar::builtin`]) covers Indian national
//! and public holidays for 2024–2026. Some festival dates follow the lunar
//! calendar and are approximate.
//!
//! Years missing from a calendar have no holidays: only the weekend test
//! applies to them.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Informational grouping of a holiday. Never affects detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    National,
    Festival,
    Religious,
}

/// A single public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Display name (e.g., "Diwali").
    pub name: String,
    /// Civil date, `yyyy-MM-dd` on the wire.
    pub date: NaiveDate,
    /// Accepts the older `type` key when loading tables.
    #[serde(alias = "type")]
    pub category: HolidayCategory,
}

impl HolidayRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate, category: HolidayCategory) -> Self {
        HolidayRecord {
            name: name.into(),
            date,
            category,
        }
    }
}

/// Immutable holiday table keyed by year.
///
/// Within a year, records keep the order they were supplied in. That order
/// is not assumed to be chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    years: BTreeMap<i32, Vec<HolidayRecord>>,
}

impl HolidayCalendar {
    /// A calendar with no holidays at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in Indian holiday table for 2024, 2025 and 2026.
    pub fn builtin() -> Self {
        let mut years: BTreeMap<i32, Vec<HolidayRecord>> = BTreeMap::new();
        for (year, entries) in BUILTIN_TABLE {
            years.insert(
                *year,
                entries
                    .iter()
                    .map(|(name, date, category)| HolidayRecord::new(*name, *date, *category))
                    .collect(),
            );
        }
        HolidayCalendar { years }
    }

    /// Build a calendar from records, filing each under its own date's year.
    pub fn from_records(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        let mut years: BTreeMap<i32, Vec<HolidayRecord>> = BTreeMap::new();
        for record in records {
            years.entry(record.date.year()).or_default().push(record);
        }
        HolidayCalendar { years }
    }

    /// Load a calendar from JSON shaped like the built-in table:
    ///
    /// ```json
    /// { "2025": [ { "name": "Holi", "date": "2025-03-14", "category": "festival" } ] }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidCalendar`] for malformed JSON, unparsable
    /// dates, or a record filed under a year other than its date's year.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekendly_engine::calendar::HolidayCalendar;
    ///
    /// let json = r#"{"2025": [{"name": "Holi", "date": "2025-03-14", "category": "festival"}]}"#;
    /// let calendar = HolidayCalendar::from_json(json).unwrap();
    /// assert_eq!(calendar.holidays_for_year(2025).len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let years: BTreeMap<i32, Vec<HolidayRecord>> = serde_json::from_str(json)
            .map_err(|e| PlannerError::InvalidCalendar(e.to_string()))?;

        for (year, records) in &years {
            if let Some(stray) = records.iter().find(|r| r.date.year() != *year) {
                return Err(PlannerError::InvalidCalendar(format!(
                    "'{}' ({}) is listed under {}",
                    stray.name, stray.date, year
                )));
            }
        }

        Ok(HolidayCalendar { years })
    }

    /// Holidays for `year` in table order. Empty when the year is not covered.
    pub fn holidays_for_year(&self, year: i32) -> &[HolidayRecord] {
        self.years.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Covered years, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Total number of holiday records across all years.
    pub fn len(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `date` exactly matches a holiday in its year's table.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_info(date).is_some()
    }

    /// The first holiday in `date`'s year that falls exactly on `date`.
    pub fn holiday_info(&self, date: NaiveDate) -> Option<&HolidayRecord> {
        self.holidays_for_year(date.year())
            .iter()
            .find(|h| h.date == date)
    }

    /// A weekend day or a listed holiday.
    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.is_holiday(date)
    }

    /// The earliest holiday strictly after `today`, looking at this year's and
    /// next year's tables. Same-day ties go to the record listed first.
    pub fn next_holiday(&self, today: NaiveDate) -> Option<&HolidayRecord> {
        let year = today.year();
        self.holidays_for_year(year)
            .iter()
            .chain(self.holidays_for_year(year + 1))
            .filter(|h| h.date > today)
            .min_by_key(|h| h.date)
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse a caller-supplied ISO 8601 civil date (`yyyy-MM-dd`).
///
/// # Errors
///
/// Returns [`PlannerError::InvalidDate`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| PlannerError::InvalidDate(format!("'{}': {}", s, e)))
}

// ── Built-in table ──────────────────────────────────────────────────────────

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date in built-in holiday table"),
    }
}

type BuiltinEntry = (&'static str, NaiveDate, HolidayCategory);

use HolidayCategory::{Festival, National, Religious};

const HOLIDAYS_2024: &[BuiltinEntry] = &[
    ("New Year's Day", ymd(2024, 1, 1), National),
    ("Makar Sankranti", ymd(2024, 1, 15), Festival),
    ("Republic Day", ymd(2024, 1, 26), National),
    ("Maha Shivratri", ymd(2024, 3, 8), Festival),
    ("Holi", ymd(2024, 3, 25), Festival),
    ("Good Friday", ymd(2024, 3, 29), Religious),
    ("Ram Navami", ymd(2024, 4, 17), Festival),
    ("Hanuman Jayanti", ymd(2024, 4, 23), Festival),
    ("Buddha Purnima", ymd(2024, 5, 23), Festival),
    ("Eid al-Fitr", ymd(2024, 4, 11), Religious),
    ("Independence Day", ymd(2024, 8, 15), National),
    ("Janmashtami", ymd(2024, 8, 26), Festival),
    ("Ganesh Chaturthi", ymd(2024, 9, 7), Festival),
    ("Gandhi Jayanti", ymd(2024, 10, 2), National),
    ("Dussehra", ymd(2024, 10, 12), Festival),
    ("Diwali", ymd(2024, 11, 1), Festival),
    ("Guru Nanak Jayanti", ymd(2024, 11, 15), Religious),
    ("Christmas Day", ymd(2024, 12, 25), Religious),
];

const HOLIDAYS_2025: &[BuiltinEntry] = &[
    ("New Year's Day", ymd(2025, 1, 1), National),
    ("Makar Sankranti", ymd(2025, 1, 14), Festival),
    ("Republic Day", ymd(2025, 1, 26), National),
    ("Maha Shivratri", ymd(2025, 2, 26), Festival),
    ("Holi", ymd(2025, 3, 14), Festival),
    ("Good Friday", ymd(2025, 4, 18), Religious),
    ("Ram Navami", ymd(2025, 4, 6), Festival),
    ("Hanuman Jayanti", ymd(2025, 4, 13), Festival),
    ("Buddha Purnima", ymd(2025, 5, 12), Festival),
    ("Eid al-Fitr", ymd(2025, 3, 31), Religious),
    ("Independence Day", ymd(2025, 8, 15), National),
    ("Janmashtami", ymd(2025, 8, 16), Festival),
    ("Ganesh Chaturthi", ymd(2025, 8, 27), Festival),
    ("Gandhi Jayanti", ymd(2025, 10, 2), National),
    ("Dussehra", ymd(2025, 10, 2), Festival),
    ("Diwali", ymd(2025, 10, 20), Festival),
    ("Guru Nanak Jayanti", ymd(2025, 11, 5), Religious),
    ("Christmas Day", ymd(2025, 12, 25), Religious),
];

const HOLIDAYS_2026: &[BuiltinEntry] = &[
    ("New Year's Day", ymd(2026, 1, 1), National),
    ("Makar Sankranti", ymd(2026, 1, 14), Festival),
    ("Republic Day", ymd(2026, 1, 26), National),
    ("Maha Shivratri", ymd(2026, 2, 17), Festival),
    ("Holi", ymd(2026, 3, 3), Festival),
    ("Good Friday", ymd(2026, 4, 3), Religious),
    ("Ram Navami", ymd(2026, 3, 25), Festival),
    ("Hanuman Jayanti", ymd(2026, 4, 1), Festival),
    ("Buddha Purnima", ymd(2026, 5, 1), Festival),
    ("Eid al-Fitr", ymd(2026, 3, 20), Religious),
    ("Independence Day", ymd(2026, 8, 15), National),
    ("Janmashtami", ymd(2026, 9, 4), Festival),
    ("Ganesh Chaturthi", ymd(2026, 8, 16), Festival),
    ("Gandhi Jayanti", ymd(2026, 10, 2), National),
    ("Dussehra", ymd(2026, 10, 21), Festival),
    ("Diwali", ymd(2026, 11, 8), Festival),
    ("Guru Nanak Jayanti", ymd(2026, 11, 24), Religious),
    ("Christmas Day", ymd(2026, 12, 25), Religious),
];

const BUILTIN_TABLE: &[(i32, &[BuiltinEntry])] = &[
    (2024, HOLIDAYS_2024),
    (2025, HOLIDAYS_2025),
    (2026, HOLIDAYS_2026),
];
