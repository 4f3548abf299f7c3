//! Axum route handlers for interview preparation.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::interview::generator::{
    delete_question, generate_questions, list_questions, store_questions, update_answer,
    GenerateQuestionsRequest, InterviewQuestion,
};
use crate::interview::question_bank::{lookup, BankMatch};
use crate::models::interview::InterviewQuestionRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerUpdate {
    pub answer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BankQuery {
    #[serde(default)]
    pub role: String,
}

/// POST /functions/v1/generate-interview-questions
///
/// The response does not say whether the questions came from the model or the fallback set.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(request): JsonBody<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    request.validate()?;
    let company = request.company();

    let generated = generate_questions(&state.llm, &request.job_role, company).await?;
    if generated.is_fallback() {
        warn!(
            "Returning fallback interview questions for '{}'",
            request.job_role.trim()
        );
    } else {
        info!(
            "Interview questions for '{}' from {}",
            request.job_role.trim(),
            generated.source()
        );
    }
    let questions = generated.into_inner();

    store_questions(&state.db, user_id, &request.job_role, company, &questions).await?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// GET /api/v1/interview-questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<InterviewQuestionRow>>, AppError> {
    Ok(Json(list_questions(&state.db, user_id).await?))
}

/// PATCH /api/v1/interview-questions/:id
pub async fn handle_update_answer(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(id): PathParam<Uuid>,
    JsonBody(update): JsonBody<AnswerUpdate>,
) -> Result<Json<InterviewQuestionRow>, AppError> {
    let answer = update.answer.as_deref().filter(|a| !a.trim().is_empty());
    Ok(Json(update_answer(&state.db, user_id, id, answer).await?))
}

/// DELETE /api/v1/interview-questions/:id
pub async fn handle_delete_question(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_question(&state.db, user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/question-bank?role=...
///
/// Static lookup; needs no credentials and never leaves the process.
pub async fn handle_question_bank(QueryParams(query): QueryParams<BankQuery>) -> Json<BankMatch> {
    Json(lookup(&query.role))
}
