use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthorized,
    TimesheetNotFound,
    TaskNotFound,
    ValidationError,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::TimesheetNotFound => "TIMESHEET_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct WeeklogError {
    pub code: ErrorCode,
    pub message: String,
}

impl WeeklogError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Unauthorized")
    }

    pub fn timesheet_not_found() -> Self {
        Self::new(ErrorCode::TimesheetNotFound, "Timesheet not found")
    }

    pub fn task_not_found() -> Self {
        Self::new(ErrorCode::TaskNotFound, "Task not found")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::TimesheetNotFound | ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WeeklogError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message }))).into_response()
    }
}
