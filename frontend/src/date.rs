//! Due-date parsing and the relative labels shown on task cards.
//!
//! Backend timestamps without an offset are wall-clock times in the viewer's
//! zone, the same representation the form's date-time input submits.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses a backend timestamp into `tz`.
pub fn parse_due<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw) {
        return Some(fixed.with_timezone(tz));
    }
    let naive = parse_naive(raw)?;
    tz.from_local_datetime(&naive).earliest()
}

/// Whole calendar days from `now` to `due`; negative when overdue.
pub fn day_difference<Tz: TimeZone>(due: &DateTime<Tz>, now: &DateTime<Tz>) -> i64 {
    (due.date_naive() - now.date_naive()).num_days()
}

pub fn format_due<Tz: TimeZone>(due: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    match day_difference(due, now) {
        n if n < 0 => format!("Overdue {}d", n.abs()),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("{n} days"),
    }
}

/// Label for a raw backend due date, evaluated against `now`.
pub fn due_label<Tz: TimeZone>(raw: &str, now: &DateTime<Tz>) -> Option<String> {
    parse_due(raw, &now.timezone()).map(|due| format_due(&due, now))
}

/// Converts a backend due date into the `YYYY-MM-DDTHH:MM` value a
/// `datetime-local` input expects.
pub fn to_input_value<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String> {
    parse_due(raw, tz).map(|due| due.naive_local().format(INPUT_FORMAT).to_string())
}
