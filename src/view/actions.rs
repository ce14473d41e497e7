use crate::models::TimesheetStatus;

/// What a user is expected to do next with a timesheet in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesheetAction {
    View,
    Update,
    Create,
}

impl TimesheetAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Update => "Update",
            Self::Create => "Create",
        }
    }
}

pub fn action_for_status(status: TimesheetStatus) -> TimesheetAction {
    match status {
        TimesheetStatus::Completed => TimesheetAction::View,
        TimesheetStatus::Incomplete => TimesheetAction::Update,
        TimesheetStatus::Missing => TimesheetAction::Create,
    }
}
