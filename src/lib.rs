pub mod auth;
pub mod error;
pub mod http;
pub mod models;
pub mod store;
pub mod view;

pub use error::{ErrorCode, WeeklogError};
pub use http::{build_router, AppState};
pub use store::TimesheetStore;
