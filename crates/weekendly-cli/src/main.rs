use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weekendly_engine::{
    detect_long_weekends_with_options, is_weekend, parse_date, today_in_timezone,
    upcoming_long_weekends_with_suggestions, BannerSummary, DetectOptions, HolidayCalendar,
    WeekendPlan, DEFAULT_DAYS_AHEAD,
};

/// weekendly - holiday-aware long weekend planner
#[derive(Parser)]
#[command(name = "weekendly", version)]
#[command(about = "Find long weekends around public holidays", long_about = None)]
struct Cli {
    /// Holiday table (JSON, keyed by year) to use instead of the built-in one
    #[arg(long, global = true)]
    calendar: Option<PathBuf>,

    /// IANA timezone that decides what "today" is
    #[arg(long, global = true, default_value = "Asia/Kolkata")]
    timezone: String,

    /// Use this date as today (YYYY-MM-DD) instead of the clock
    #[arg(long, global = true)]
    today: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Log detection steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upcoming long weekends with suggestions
    LongWeekends {
        /// Maximum number of long weekends to list
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Every long weekend touching a custom scan window, without suggestions
    Scan {
        /// Scan horizon in days
        #[arg(long, default_value_t = DEFAULT_DAYS_AHEAD)]
        days: u32,
    },
    /// The next holiday after today
    NextHoliday,
    /// Look up the holiday on a date
    Holiday {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Whether a date is a day off
    DayOff {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// All holidays listed for a year
    Holidays {
        /// Calendar year
        year: i32,
    },
    /// Weekend preset for the next long weekend
    Plan,
    /// Banner text for the next long weekend
    Banner {
        /// Long weekends to consider
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let calendar = load_calendar(cli.calendar.as_deref())?;
    let today = resolve_today(cli.today.as_deref(), &cli.timezone)?;
    debug!(%today, timezone = %cli.timezone, "resolved today");

    let output = match cli.command {
        Commands::LongWeekends { limit } => {
            to_value(upcoming_long_weekends_with_suggestions(&calendar, today, limit))?
        }
        Commands::Scan { days } => {
            let options = DetectOptions { days_ahead: days };
            to_value(detect_long_weekends_with_options(&calendar, today, &options))?
        }
        Commands::NextHoliday => to_value(calendar.next_holiday(today))?,
        Commands::Holiday { date } => {
            let date = parse_date(&date)?;
            to_value(calendar.holiday_info(date))?
        }
        Commands::DayOff { date } => {
            let date = parse_date(&date)?;
            json!({
                "date": date,
                "weekend": is_weekend(date),
                "holiday": calendar.holiday_info(date),
                "day_off": calendar.is_day_off(date),
            })
        }
        Commands::Holidays { year } => to_value(calendar.holidays_for_year(year))?,
        Commands::Plan => {
            let upcoming = upcoming_long_weekends_with_suggestions(&calendar, today, 1);
            to_value(upcoming.first().map(|u| WeekendPlan::for_span(&u.span)))?
        }
        Commands::Banner { limit } => {
            let upcoming = upcoming_long_weekends_with_suggestions(&calendar, today, limit);
            to_value(BannerSummary::from_upcoming(&upcoming))?
        }
    };

    let rendered = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_calendar(path: Option<&Path>) -> Result<HolidayCalendar> {
    let Some(path) = path else {
        return Ok(HolidayCalendar::builtin());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read calendar {}", path.display()))?;
    let calendar = HolidayCalendar::from_json(&json)
        .with_context(|| format!("failed to load calendar {}", path.display()))?;
    debug!(path = %path.display(), holidays = calendar.len(), "loaded calendar");
    Ok(calendar)
}

fn resolve_today(today: Option<&str>, timezone: &str) -> Result<NaiveDate> {
    match today {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today_in_timezone(Utc::now(), timezone)?),
    }
}

fn to_value<T: Serialize>(value: T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
