use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::auth::{verify_credentials, Credentials};
use crate::error::WeeklogError;
use crate::http::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Value>, WeeklogError> {
    let user = verify_credentials(&credentials)?;
    let session = state.sessions.issue(user).await;
    info!(email = %session.user.email, "session issued");
    Ok(Json(json!({
        "token": session.token,
        "expiresAt": session.expires_at,
        "user": session.user,
    })))
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Reject the request with 401 before any handler logic unless it carries a
/// live bearer session.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let live = match bearer_token(&request) {
        Some(token) => state.sessions.resolve(token).await.is_some(),
        None => false,
    };
    if !live {
        debug!(path = %request.uri().path(), "rejecting unauthenticated request");
        return WeeklogError::unauthorized().into_response();
    }
    next.run(request).await
}
