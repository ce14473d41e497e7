use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::models::{Task, Timesheet};

pub const WEEKLY_TARGET_HOURS: f64 = 40.0;

/// Bucket a timesheet's tasks by calendar date.
///
/// The five weekday keys (start date plus 0..5 days) are always present,
/// empty or not. A task dated outside that window is still kept, under its
/// own literal date key; the collection is never filtered to the window.
pub fn group_tasks_by_date(timesheet: &Timesheet) -> BTreeMap<NaiveDate, Vec<Task>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for offset in 0..5 {
        grouped.insert(timesheet.start_date + Days::new(offset), Vec::new());
    }
    for task in &timesheet.tasks {
        grouped.entry(task.date).or_default().push(task.clone());
    }
    grouped
}

/// Sum of all task hours, regardless of date bucket.
pub fn total_hours(timesheet: &Timesheet) -> f64 {
    timesheet.tasks.iter().map(|t| t.hours).sum()
}

/// Percentage of the 40-hour week covered, rounded, capped at 100.
pub fn progress_percent(timesheet: &Timesheet) -> u32 {
    let percent = (total_hours(timesheet) / WEEKLY_TARGET_HOURS * 100.0).round();
    (percent as u32).min(100)
}
