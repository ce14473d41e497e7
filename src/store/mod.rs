pub mod seed;
pub mod timesheet_store;

pub use timesheet_store::TimesheetStore;
