use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::info;

use crate::models::{NewTask, NewTimesheet, TimesheetStatus};
use crate::store::TimesheetStore;

const PROJECT_NAMES: [&str; 8] = [
    "Project Alpha",
    "Project Beta",
    "Website Redesign",
    "Mobile App",
    "Backend API",
    "Dashboard",
    "Analytics Platform",
    "Customer Portal",
];

const TASK_NAMES: [&str; 10] = [
    "Homepage Development",
    "API Integration",
    "Database Design",
    "UI/UX Design",
    "Code Review",
    "Bug Fixes",
    "Documentation",
    "Testing",
    "Deployment",
    "Meeting",
];

/// How many of the most recent seeded weeks cycle through every status
/// instead of skewing towards completed.
const RECENT_WEEKS: u32 = 20;

fn status_for_week(index: u32, total: u32) -> TimesheetStatus {
    if total > RECENT_WEEKS && index < total - RECENT_WEEKS {
        // Older weeks: mostly completed, a few incomplete, rare missing.
        match index % 10 {
            0..=6 => TimesheetStatus::Completed,
            7 | 8 => TimesheetStatus::Incomplete,
            _ => TimesheetStatus::Missing,
        }
    } else {
        match index % 3 {
            0 => TimesheetStatus::Completed,
            1 => TimesheetStatus::Incomplete,
            _ => TimesheetStatus::Missing,
        }
    }
}

fn first_monday_from(mut date: NaiveDate) -> NaiveDate {
    while date.weekday() != Weekday::Mon {
        date = date.succ_opt().expect("date in range");
    }
    date
}

/// Populate the store with `weeks` consecutive demo weeks starting at the
/// first Monday on/after 2024-01-01. Deterministic: the same arguments always
/// produce the same dataset.
pub async fn seed_demo_weeks(store: &TimesheetStore, weeks: u32) {
    let origin = first_monday_from(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));

    for i in 0..weeks {
        let start_date = origin + Days::new(u64::from(i) * 7);
        let end_date = start_date + Days::new(4);
        let status = status_for_week(i, weeks);

        let ts = store
            .create(NewTimesheet {
                start_date,
                end_date,
                status: Some(status),
                tasks: None,
            })
            .await;

        if status == TimesheetStatus::Missing {
            continue;
        }
        let task_count = 2 + (i as usize % 3); // 2-4 tasks per week
        for d in 0..task_count {
            let date = start_date + Days::new((d % 5) as u64);
            let task = NewTask {
                name: TASK_NAMES[(i as usize + d) % TASK_NAMES.len()].to_string(),
                hours: (2 + (i as usize + d) % 4) as f64, // 2-5 hours
                project_name: PROJECT_NAMES[(i as usize * 3 + d) % PROJECT_NAMES.len()].to_string(),
                date,
            };
            // Parent was just created; add_task cannot miss.
            let _ = store.add_task(&ts.id, task).await;
        }
    }

    info!(weeks, total = store.count().await, "seeded demo timesheets");
}
