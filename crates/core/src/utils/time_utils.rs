use chrono::{Datelike, NaiveDate};

/// Returns the number of calendar months between two dates.
///
/// Only the year and month components are compared; the day of month is
/// ignored. The result is negative when `end` is before `start`.
///
/// # Arguments
/// * `start` - The earlier date
/// * `end` - The later date
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}
