use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single unit of work performed on one calendar date within a timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub hours: f64,
    pub project_name: String,
    pub date: NaiveDate,
}

/// Creation input; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub hours: f64,
    pub project_name: String,
    pub date: NaiveDate,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
