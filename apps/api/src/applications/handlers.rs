//! Axum route handlers for the job application tracker.

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::applications::store::{
    create_application, delete_application, list_applications, today, update_application,
    ApplicationInput,
};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{JsonBody, PathParam};
use crate::models::application::JobApplicationRow;
use crate::state::AppState;

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(input): JsonBody<ApplicationInput>,
) -> Result<(StatusCode, Json<JobApplicationRow>), AppError> {
    let app = input.validate(today())?;
    let row = create_application(&state.db, user_id, &app).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<JobApplicationRow>>, AppError> {
    Ok(Json(list_applications(&state.db, user_id).await?))
}

/// PUT /api/v1/applications/:id
pub async fn handle_update_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(id): PathParam<Uuid>,
    JsonBody(input): JsonBody<ApplicationInput>,
) -> Result<Json<JobApplicationRow>, AppError> {
    let app = input.validate(today())?;
    Ok(Json(update_application(&state.db, user_id, id, &app).await?))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_application(&state.db, user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
