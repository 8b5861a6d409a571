//! Shared date-bucketing utilities.
//!
//! Both the per-day aggregation mode and the calendar views of the
//! surrounding system group records by calendar day; this module is the
//! single implementation of that grouping and of the day label format.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::TimeRecord;

/// Formats a calendar day as its ISO label (`YYYY-MM-DD`).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::reporting::day_label;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 23).unwrap();
/// assert_eq!(day_label(date), "2026-02-23");
/// ```
pub fn day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Groups records by calendar day, ascending.
///
/// The returned map iterates in date order, which is the mandated order for
/// chronological reports.
pub fn bucket_by_day(records: &[TimeRecord]) -> BTreeMap<NaiveDate, Vec<&TimeRecord>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&TimeRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date).or_default().push(record);
    }
    buckets
}
