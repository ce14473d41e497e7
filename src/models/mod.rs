pub mod task;
pub mod timesheet;

pub use task::*;
pub use timesheet::*;
