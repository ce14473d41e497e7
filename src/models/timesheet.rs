use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Completed,
    Incomplete,
    Missing,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
            Self::Missing => "missing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "incomplete" => Some(Self::Incomplete),
            "missing" => Some(Self::Missing),
            _ => None,
        }
    }

    /// Badge label shown in week listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Incomplete => "INCOMPLETE",
            Self::Missing => "MISSING",
        }
    }
}

/// A weekly record of worked hours, partitioned into daily tasks.
///
/// `week_number` is assigned sequentially at creation and is not required to
/// be consistent with `start_date`/`end_date`. `status` never moves back to
/// `missing` once a task exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: String,
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TimesheetStatus,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input. Week number, id, and timestamps are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimesheet {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: Option<TimesheetStatus>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetPatch {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TimesheetStatus>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            TimesheetStatus::Completed,
            TimesheetStatus::Incomplete,
            TimesheetStatus::Missing,
        ] {
            assert_eq!(TimesheetStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(TimesheetStatus::from_str("done"), None);
    }

    #[test]
    fn badge_labels_are_uppercase() {
        assert_eq!(TimesheetStatus::Completed.label(), "COMPLETED");
        assert_eq!(TimesheetStatus::Incomplete.label(), "INCOMPLETE");
        assert_eq!(TimesheetStatus::Missing.label(), "MISSING");
    }

    #[test]
    fn wire_form_uses_camel_case_and_lowercase_status() {
        let ts = Timesheet {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".into(),
            week_number: 7,
            start_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 7).unwrap(),
            status: TimesheetStatus::Incomplete,
            tasks: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let v = serde_json::to_value(&ts).unwrap();
        assert_eq!(v["weekNumber"], 7);
        assert_eq!(v["startDate"], "2025-02-03");
        assert_eq!(v["status"], "incomplete");
    }
}
