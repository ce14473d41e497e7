use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::WeeklogError;
use crate::http::AppState;
use crate::models::{NewTask, Task, TaskPatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

pub async fn add_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), WeeklogError> {
    let (Some(name), Some(hours), Some(project_name)) = (body.name, body.hours, body.project_name)
    else {
        return Err(WeeklogError::validation("Missing required fields"));
    };
    let task = state
        .store
        .add_task(
            &id,
            NewTask {
                name,
                hours,
                project_name,
                date: body.date.unwrap_or_else(|| Utc::now().date_naive()),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(String, String)>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, WeeklogError> {
    let task = state.store.update_task(&id, &task_id, patch).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(String, String)>,
) -> Result<Json<Value>, WeeklogError> {
    state.store.delete_task(&id, &task_id).await?;
    Ok(Json(json!({ "success": true })))
}
