//! Pure derived-view logic over timesheets: no state, no IO.

pub mod actions;
pub mod format;
pub mod pagination;
pub mod week;

pub use actions::*;
pub use format::*;
pub use pagination::*;
pub use week::*;
