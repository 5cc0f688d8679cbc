//! Calendar: turns a date range into the ordered `DayLabel` sequence the rest
//! of the scheduler indexes over, and groups that sequence into ISO weeks and
//! monthly runs.

use chrono::{Datelike, Duration, NaiveDate};
use itertools::Itertools;

use super::error::SchedulerError;
use super::model::DayLabel;

/// Inclusive of both endpoints. Fails with `InvalidRange` if `end < start`.
pub fn expand(start: NaiveDate, end: NaiveDate) -> Result<Vec<DayLabel>, SchedulerError> {
    if end < start {
        return Err(SchedulerError::InvalidRange {
            reason: format!("end date {end} is before start date {start}"),
        });
    }

    let mut days = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        days.push(DayLabel::new(cursor));
        cursor = cursor
            .succ_opt()
            .ok_or_else(|| SchedulerError::InvalidRange {
                reason: "range runs past the supported civil-date window".to_string(),
            })?;
    }
    Ok(days)
}

/// The seven days immediately before `start`.
pub fn previous_week(start: NaiveDate) -> Result<Vec<DayLabel>, SchedulerError> {
    let week_start = start - Duration::days(7);
    let week_end = start - Duration::days(1);
    expand(week_start, week_end)
}

/// Stable grouping of `days` into ISO-calendar weeks, preserving day order
/// both within and across groups.
pub fn group_by_iso_week(days: &[DayLabel]) -> Vec<Vec<DayLabel>> {
    days.iter()
        .copied()
        .chunk_by(|d| (d.iso_year, d.iso_week))
        .into_iter()
        .map(|(_, group)| group.collect())
        .collect()
}

/// Contiguous runs of `days` sharing the same (year, month).
pub fn split_by_month(days: &[DayLabel]) -> Vec<Vec<DayLabel>> {
    days.iter()
        .copied()
        .chunk_by(|d| (d.date.year(), d.month))
        .into_iter()
        .map(|(_, group)| group.collect())
        .collect()
}
