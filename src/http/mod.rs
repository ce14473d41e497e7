pub mod auth_routes;
pub mod tasks;
pub mod timesheets;

use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::auth::SessionStore;
use crate::store::TimesheetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: TimesheetStore,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: TimesheetStore, sessions: SessionStore) -> Self {
        Self { store, sessions }
    }
}

async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/timesheets",
            get(timesheets::list_timesheets).post(timesheets::create_timesheet),
        )
        .route(
            "/timesheets/:id",
            get(timesheets::get_timesheet)
                .put(timesheets::update_timesheet)
                .delete(timesheets::delete_timesheet),
        )
        .route("/timesheets/:id/tasks", post(tasks::add_task))
        .route(
            "/timesheets/:id/tasks/:task_id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_routes::require_session,
        ));

    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/auth/login", post(auth_routes::login_handler))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
