//! Resume optimization — orchestrates the full round trip for one request.
//!
//! Flow: extract keywords → score → rewrite resume → write cover letter → persist → return.
//! Upstream calls run one after another. The single INSERT is the last step, so a failure
//! anywhere earlier leaves nothing behind.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::TRUTHFULNESS_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::optimization::ResumeOptimizationRow;
use crate::optimization::keywords::extract_keywords;
use crate::optimization::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM, RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM,
};
use crate::optimization::scoring::MatchScorer;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub resume_content: String,
    pub job_description: String,
}

impl OptimizeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_content.trim().is_empty() {
            return Err(AppError::Validation(
                "resumeContent cannot be empty".to_string(),
            ));
        }
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "jobDescription cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The fields a caller sees for one optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationView {
    pub id: Uuid,
    pub optimized_resume: String,
    pub cover_letter: String,
    pub match_score: i32,
    pub matched_keywords: Vec<String>,
}

impl From<ResumeOptimizationRow> for OptimizationView {
    fn from(row: ResumeOptimizationRow) -> Self {
        Self {
            id: row.id,
            optimized_resume: row.optimized_resume,
            cover_letter: row.cover_letter,
            match_score: row.match_score,
            matched_keywords: row.matched_keywords,
        }
    }
}

/// Text produced by the model calls, before persistence.
#[derive(Debug, Clone)]
pub struct OptimizationDraft {
    pub optimized_resume: String,
    pub cover_letter: String,
    pub match_score: u8,
    pub matched_keywords: Vec<String>,
}

/// Runs the model calls for one request. Touches no storage.
pub async fn draft_optimization(
    llm: &LlmClient,
    scorer: &dyn MatchScorer,
    request: &OptimizeRequest,
) -> Result<OptimizationDraft, AppError> {
    let keywords = extract_keywords(&request.job_description, llm).await?;
    info!(
        "Keywords ready: {} from {}",
        keywords.value().len(),
        keywords.source()
    );
    let matched_keywords = keywords.into_inner();

    let match_score = scorer.score(
        &request.resume_content,
        &request.job_description,
        &matched_keywords,
    );
    info!("Match score {match_score} ({} scorer)", scorer.name());

    let resume_prompt = RESUME_PROMPT_TEMPLATE
        .replace("{truthfulness_instruction}", TRUTHFULNESS_INSTRUCTION)
        .replace("{keywords}", &matched_keywords.join(", "))
        .replace("{job_description}", &request.job_description)
        .replace("{resume}", &request.resume_content);
    let optimized_resume = llm
        .call_text(&resume_prompt, RESUME_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

    let cover_prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{truthfulness_instruction}", TRUTHFULNESS_INSTRUCTION)
        .replace("{job_description}", &request.job_description)
        .replace("{resume}", &request.resume_content);
    let cover_letter = llm
        .call_text(&cover_prompt, COVER_LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    Ok(OptimizationDraft {
        optimized_resume: optimized_resume.trim().to_string(),
        cover_letter: cover_letter.trim().to_string(),
        match_score,
        matched_keywords,
    })
}

/// Runs the model calls and persists one `resume_optimizations` row for `user_id`.
pub async fn optimize_resume(
    pool: &PgPool,
    llm: &LlmClient,
    scorer: &dyn MatchScorer,
    user_id: Uuid,
    request: OptimizeRequest,
) -> Result<OptimizationView, AppError> {
    info!("Optimizing resume for user {user_id}");
    let draft = draft_optimization(llm, scorer, &request).await?;

    let row = sqlx::query_as::<_, ResumeOptimizationRow>(
        r#"
        INSERT INTO resume_optimizations
            (id, user_id, job_description, original_resume, optimized_resume,
             cover_letter, match_score, matched_keywords)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&request.job_description)
    .bind(&request.resume_content)
    .bind(&draft.optimized_resume)
    .bind(&draft.cover_letter)
    .bind(i32::from(draft.match_score))
    .bind(&draft.matched_keywords)
    .fetch_one(pool)
    .await?;

    info!("Stored optimization {} for user {user_id}", row.id);
    Ok(row.into())
}

/// Returns the caller's optimizations, newest first.
pub async fn list_optimizations(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ResumeOptimizationRow>, AppError> {
    Ok(sqlx::query_as::<_, ResumeOptimizationRow>(
        "SELECT * FROM resume_optimizations WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Fetches one optimization if it belongs to `user_id`.
pub async fn get_optimization(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<ResumeOptimizationRow, AppError> {
    sqlx::query_as::<_, ResumeOptimizationRow>(
        "SELECT * FROM resume_optimizations WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Optimization {id} not found")))
}
