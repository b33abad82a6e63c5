//! Activity catalog and roster handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use signup_types::Catalog;

/// `?email=` query parameter
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Confirmation body for roster changes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Redirect `/` to the static front-end
pub async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.index_url)
}

/// List all activities with their current rosters
pub async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.registry.list().await)
}

/// Sign a student up for an activity
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let confirmation = state
        .registry
        .signup(&name, &query.email)
        .await
        .inspect_err(|e| tracing::debug!(activity = %name, error = %e, "Signup rejected"))?;

    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

/// Remove a student from an activity
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let confirmation = state
        .registry
        .unregister(&name, &query.email)
        .await
        .inspect_err(|e| tracing::debug!(activity = %name, error = %e, "Unregister rejected"))?;

    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}
