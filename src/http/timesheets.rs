use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::WeeklogError;
use crate::http::AppState;
use crate::models::{NewTimesheet, Task, Timesheet, TimesheetPatch, TimesheetStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimesheetBody {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TimesheetStatus>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

pub async fn list_timesheets(State(state): State<AppState>) -> Json<Vec<Timesheet>> {
    Json(state.store.get_all().await)
}

pub async fn create_timesheet(
    State(state): State<AppState>,
    Json(body): Json<CreateTimesheetBody>,
) -> Result<(StatusCode, Json<Timesheet>), WeeklogError> {
    let (Some(start_date), Some(end_date)) = (body.start_date, body.end_date) else {
        return Err(WeeklogError::validation("Missing required fields"));
    };
    let timesheet = state
        .store
        .create(NewTimesheet {
            start_date,
            end_date,
            status: body.status,
            tasks: body.tasks,
        })
        .await;
    info!(id = %timesheet.id, week = timesheet.week_number, "created timesheet");
    Ok((StatusCode::CREATED, Json(timesheet)))
}

pub async fn get_timesheet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Timesheet>, WeeklogError> {
    let timesheet = state
        .store
        .get_by_id(&id)
        .await
        .ok_or_else(WeeklogError::timesheet_not_found)?;
    Ok(Json(timesheet))
}

pub async fn update_timesheet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TimesheetPatch>,
) -> Result<Json<Timesheet>, WeeklogError> {
    let timesheet = state.store.update(&id, patch).await?;
    Ok(Json(timesheet))
}

pub async fn delete_timesheet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, WeeklogError> {
    state.store.delete(&id).await?;
    info!(id = %id, "deleted timesheet");
    Ok(Json(json!({ "success": true })))
}
