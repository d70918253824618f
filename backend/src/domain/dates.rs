//! Date helpers shared by the stats and calendar logic.
//!
//! Every day is identified by its canonical key, a `YYYY-MM-DD` string built
//! from the date's own calendar fields. No timezone conversion happens here;
//! a key always names the day the caller meant.

use chrono::{Duration, Local, NaiveDate};

/// Canonical day key format
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its canonical day key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical day key back into a date
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Shift a date by a number of days (negative moves backward)
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Inclusive day count from `a` to `b`, for `b >= a`.
/// Callers clamp their arguments before calling; a reversed range is a
/// contract violation and yields a non-positive count.
pub fn days_between_inclusive(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days() + 1
}

/// The reference "today" used by the HTTP layer
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
