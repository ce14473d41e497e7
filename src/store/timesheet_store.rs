use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::WeeklogError;
use crate::models::{NewTask, NewTimesheet, Task, TaskPatch, Timesheet, TimesheetPatch, TimesheetStatus};

fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Canonical timesheet collection, shared across request handlers.
///
/// Writes are last-write-wins; the lock only protects the collection itself,
/// there is no conflict detection between overlapping updates.
#[derive(Debug, Clone, Default)]
pub struct TimesheetStore {
    inner: Arc<RwLock<Vec<Timesheet>>>,
}

impl TimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All timesheets, ascending by week number. Ties keep insertion order.
    pub async fn get_all(&self) -> Vec<Timesheet> {
        let inner = self.inner.read().await;
        let mut all = inner.clone();
        all.sort_by_key(|t| t.week_number);
        all
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Timesheet> {
        let inner = self.inner.read().await;
        inner.iter().find(|t| t.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Create a timesheet. Week number is the current maximum plus one,
    /// status defaults to `incomplete`, tasks default to empty.
    pub async fn create(&self, data: NewTimesheet) -> Timesheet {
        let mut inner = self.inner.write().await;
        let max_week = inner.iter().map(|t| t.week_number).max().unwrap_or(0);
        let now = Utc::now();
        let timesheet = Timesheet {
            id: new_id(),
            week_number: max_week + 1,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status.unwrap_or(TimesheetStatus::Incomplete),
            tasks: data.tasks.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        inner.push(timesheet.clone());
        timesheet
    }

    /// Merge the supplied fields onto an existing timesheet.
    pub async fn update(&self, id: &str, patch: TimesheetPatch) -> Result<Timesheet, WeeklogError> {
        let mut inner = self.inner.write().await;
        let timesheet = inner
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(WeeklogError::timesheet_not_found)?;

        if let Some(start_date) = patch.start_date {
            timesheet.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            timesheet.end_date = end_date;
        }
        if let Some(status) = patch.status {
            timesheet.status = status;
        }
        if let Some(tasks) = patch.tasks {
            timesheet.tasks = tasks;
        }
        timesheet.updated_at = Utc::now();
        Ok(timesheet.clone())
    }

    /// Append a task to a timesheet. A `missing` parent is promoted to
    /// `incomplete`; this is the only implicit status transition.
    pub async fn add_task(&self, timesheet_id: &str, data: NewTask) -> Result<Task, WeeklogError> {
        let mut inner = self.inner.write().await;
        let timesheet = inner
            .iter_mut()
            .find(|t| t.id == timesheet_id)
            .ok_or_else(WeeklogError::timesheet_not_found)?;

        let task = Task {
            id: new_id(),
            name: data.name,
            hours: data.hours,
            project_name: data.project_name,
            date: data.date,
        };
        timesheet.tasks.push(task.clone());
        timesheet.updated_at = Utc::now();

        if timesheet.status == TimesheetStatus::Missing {
            timesheet.status = TimesheetStatus::Incomplete;
        }

        Ok(task)
    }

    pub async fn update_task(
        &self,
        timesheet_id: &str,
        task_id: &str,
        patch: TaskPatch,
    ) -> Result<Task, WeeklogError> {
        let mut inner = self.inner.write().await;
        let timesheet = inner
            .iter_mut()
            .find(|t| t.id == timesheet_id)
            .ok_or_else(WeeklogError::timesheet_not_found)?;
        let task = timesheet
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(WeeklogError::task_not_found)?;

        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(hours) = patch.hours {
            task.hours = hours;
        }
        if let Some(project_name) = patch.project_name {
            task.project_name = project_name;
        }
        if let Some(date) = patch.date {
            task.date = date;
        }
        let task = task.clone();
        timesheet.updated_at = Utc::now();
        Ok(task)
    }

    pub async fn delete_task(&self, timesheet_id: &str, task_id: &str) -> Result<(), WeeklogError> {
        let mut inner = self.inner.write().await;
        let timesheet = inner
            .iter_mut()
            .find(|t| t.id == timesheet_id)
            .ok_or_else(WeeklogError::timesheet_not_found)?;
        let index = timesheet
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(WeeklogError::task_not_found)?;

        timesheet.tasks.remove(index);
        timesheet.updated_at = Utc::now();
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), WeeklogError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(WeeklogError::timesheet_not_found)?;
        inner.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;

    fn week(start: (i32, u32, u32), end: (i32, u32, u32)) -> NewTimesheet {
        NewTimesheet {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            status: None,
            tasks: None,
        }
    }

    fn a_task() -> NewTask {
        NewTask {
            name: "Code Review".into(),
            hours: 3.0,
            project_name: "Project Alpha".into(),
            date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_defaults_and_assigns_sequential_week_numbers() {
        let store = TimesheetStore::new();
        let first = store.create(week((2025, 2, 3), (2025, 2, 7))).await;
        assert_eq!(first.week_number, 1);
        assert_eq!(first.status, TimesheetStatus::Incomplete);
        assert!(first.tasks.is_empty());

        let second = store.create(week((2025, 2, 10), (2025, 2, 14))).await;
        assert_eq!(second.week_number, 2);
    }

    #[tokio::test]
    async fn week_number_is_max_plus_one_after_deletes() {
        let store = TimesheetStore::new();
        let first = store.create(week((2025, 1, 6), (2025, 1, 10))).await;
        let second = store.create(week((2025, 1, 13), (2025, 1, 17))).await;
        store.delete(&first.id).await.unwrap();

        let third = store.create(week((2025, 1, 20), (2025, 1, 24))).await;
        assert_eq!(second.week_number, 2);
        assert_eq!(third.week_number, 3);
    }

    #[tokio::test]
    async fn get_all_sorts_ascending_by_week_number() {
        let store = TimesheetStore::new();
        // Scramble the underlying collection; creation order normally matches
        // week order, so build the disorder by hand.
        {
            let mut inner = store.inner.write().await;
            for week_number in [3u32, 1, 4, 2] {
                let now = Utc::now();
                inner.push(Timesheet {
                    id: new_id(),
                    week_number,
                    start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                    status: TimesheetStatus::Incomplete,
                    tasks: vec![],
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        let all = store.get_all().await;
        let weeks: Vec<u32> = all.iter().map(|t| t.week_number).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn add_task_promotes_missing_to_incomplete_only() {
        let store = TimesheetStore::new();
        let mut data = week((2025, 2, 3), (2025, 2, 7));
        data.status = Some(TimesheetStatus::Missing);
        let ts = store.create(data).await;

        store.add_task(&ts.id, a_task()).await.unwrap();
        assert_eq!(store.get_by_id(&ts.id).await.unwrap().status, TimesheetStatus::Incomplete);

        // A second add leaves the status where it is.
        store.add_task(&ts.id, a_task()).await.unwrap();
        assert_eq!(store.get_by_id(&ts.id).await.unwrap().status, TimesheetStatus::Incomplete);
    }

    #[tokio::test]
    async fn add_task_leaves_completed_status_alone() {
        let store = TimesheetStore::new();
        let mut data = week((2025, 2, 3), (2025, 2, 7));
        data.status = Some(TimesheetStatus::Completed);
        let ts = store.create(data).await;

        store.add_task(&ts.id, a_task()).await.unwrap();
        assert_eq!(store.get_by_id(&ts.id).await.unwrap().status, TimesheetStatus::Completed);
    }

    #[tokio::test]
    async fn update_task_merges_only_supplied_fields() {
        let store = TimesheetStore::new();
        let ts = store.create(week((2025, 2, 3), (2025, 2, 7))).await;
        let task = store.add_task(&ts.id, a_task()).await.unwrap();

        let updated = store
            .update_task(&ts.id, &task.id, TaskPatch { hours: Some(5.5), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.hours, 5.5);
        assert_eq!(updated.name, "Code Review");
        assert_eq!(updated.project_name, "Project Alpha");
    }

    #[tokio::test]
    async fn task_mutations_refresh_parent_updated_at() {
        let store = TimesheetStore::new();
        let ts = store.create(week((2025, 2, 3), (2025, 2, 7))).await;
        let task = store.add_task(&ts.id, a_task()).await.unwrap();
        let before = store.get_by_id(&ts.id).await.unwrap().updated_at;

        store.delete_task(&ts.id, &task.id).await.unwrap();
        let after = store.get_by_id(&ts.id).await.unwrap().updated_at;
        assert!(after >= before);
        assert!(store.get_by_id(&ts.id).await.unwrap().tasks.is_empty());
    }

    #[tokio::test]
    async fn not_found_is_signalled_at_both_levels() {
        let store = TimesheetStore::new();
        let ts = store.create(week((2025, 2, 3), (2025, 2, 7))).await;

        let err = store.add_task("nope", a_task()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TimesheetNotFound);

        let err = store
            .update_task(&ts.id, "nope", TaskPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);

        let err = store.delete_task(&ts.id, "nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }

    #[tokio::test]
    async fn deleting_unknown_id_leaves_collection_unchanged() {
        let store = TimesheetStore::new();
        store.create(week((2025, 2, 3), (2025, 2, 7))).await;

        let err = store.delete("nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::TimesheetNotFound);
        assert_eq!(store.count().await, 1);
    }
}
