//! Day identity
//!
//! Each calendar day maps to one puzzle. Day 0 is the configured start date.

use chrono::{Local, NaiveDate};

/// Whole days from `start` to `today` (negative before the start date)
#[must_use]
pub fn day_index(start: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(start).num_days()
}

/// Day index for the local calendar date
#[must_use]
pub fn today_index(start: NaiveDate) -> i64 {
    day_index(start, Local::now().date_naive())
}
