//! Axum route handlers for resume optimization.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{JsonBody, PathParam};
use crate::models::optimization::ResumeOptimizationRow;
use crate::optimization::optimizer::{
    get_optimization, list_optimizations, optimize_resume, OptimizationView, OptimizeRequest,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimization: OptimizationView,
}

/// POST /functions/v1/optimize-resume
///
/// Keyword extraction → score → resume rewrite → cover letter → one stored row.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(request): JsonBody<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    request.validate()?;

    let optimization = optimize_resume(
        &state.db,
        &state.llm,
        state.match_scorer.as_ref(),
        user_id,
        request,
    )
    .await?;

    Ok(Json(OptimizeResponse { optimization }))
}

/// GET /api/v1/optimizations
pub async fn handle_list_optimizations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ResumeOptimizationRow>>, AppError> {
    Ok(Json(list_optimizations(&state.db, user_id).await?))
}

/// GET /api/v1/optimizations/:id
pub async fn handle_get_optimization(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> Result<Json<ResumeOptimizationRow>, AppError> {
    Ok(Json(get_optimization(&state.db, user_id, id).await?))
}
