//! Query window for matching bills against transactions.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// A bill issued up to this many days before the earliest transaction can
/// still match it (health insurers bill before the debit shows up).
const DAYS_BEFORE_EARLIEST: i64 = 29;

/// A bill issued up to this many days after the latest transaction can
/// still match it.
const DAYS_AFTER_LATEST: i64 = 15;

/// Exclusive date bounds for a bills query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Bills strictly after this date are candidates.
    pub after: NaiveDate,
    /// Bills strictly before this date are candidates.
    pub before: NaiveDate,
}

/// Computes the bills query window covering the given transactions.
///
/// The window spans from 29 days before the earliest transaction date to
/// 15 days after the latest, with exclusive bounds. Returns `None` when
/// there is no transaction to match against.
pub fn matching_date_range(transactions: &[Transaction]) -> Option<DateRange> {
    let dates: Vec<NaiveDate> = transactions.iter().map(Transaction::get_date).collect();
    let earliest = *dates.iter().min()?;
    let latest = *dates.iter().max()?;

    Some(DateRange {
        after: earliest - Duration::days(DAYS_BEFORE_EARLIEST),
        before: latest + Duration::days(DAYS_AFTER_LATEST),
    })
}
