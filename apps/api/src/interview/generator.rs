//! Interview question generation — one LLM call, a fixed fallback, one row per question.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::prompts::{COMPANY_CLAUSE_TEMPLATE, QUESTIONS_PROMPT_TEMPLATE};
use crate::interview::Category;
use crate::llm_client::extraction::Extraction;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::models::interview::InterviewQuestionRow;

/// Every generation request yields exactly this many questions.
pub const QUESTION_COUNT: usize = 5;

/// Substituted when the model's question list cannot be used.
pub const FALLBACK_QUESTIONS: [(&str, Category); QUESTION_COUNT] = [
    (
        "Tell me about a time you faced a significant challenge at work. How did you handle it?",
        Category::Behavioral,
    ),
    (
        "What technical skills make you a strong fit for this role, and how have you applied them?",
        Category::Technical,
    ),
    (
        "How would you handle competing priorities when two stakeholders need something by the same deadline?",
        Category::Situational,
    ),
    (
        "Describe a time you led a team or an initiative. What was the outcome?",
        Category::Leadership,
    ),
    (
        "Walk me through a complex problem you solved recently and the trade-offs you considered.",
        Category::Technical,
    ),
];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub job_role: String,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl GenerateQuestionsRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_role.trim().is_empty() {
            return Err(AppError::Validation("jobRole cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Company name with blank values treated as absent.
    pub fn company(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: Category,
}

#[derive(Debug, Error)]
pub enum QuestionParseError {
    #[error("not a JSON array of question objects: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected 5 questions, got {0}")]
    WrongCount(usize),

    #[error("question {0} has no text")]
    EmptyQuestion(usize),
}

pub fn fallback_questions() -> Vec<InterviewQuestion> {
    FALLBACK_QUESTIONS
        .iter()
        .map(|(question, category)| InterviewQuestion {
            question: question.to_string(),
            category: *category,
        })
        .collect()
}

/// Parses model output into exactly `QUESTION_COUNT` questions with known categories.
pub fn parse_questions(text: &str) -> Result<Vec<InterviewQuestion>, QuestionParseError> {
    let questions: Vec<InterviewQuestion> = serde_json::from_str(strip_json_fences(text))?;

    if questions.len() != QUESTION_COUNT {
        return Err(QuestionParseError::WrongCount(questions.len()));
    }
    if let Some(idx) = questions.iter().position(|q| q.question.trim().is_empty()) {
        return Err(QuestionParseError::EmptyQuestion(idx));
    }

    Ok(questions
        .into_iter()
        .map(|q| InterviewQuestion {
            question: q.question.trim().to_string(),
            category: q.category,
        })
        .collect())
}

pub fn build_prompt(job_role: &str, company_name: Option<&str>) -> String {
    let company_clause = company_name
        .map(|c| COMPANY_CLAUSE_TEMPLATE.replace("{company_name}", c))
        .unwrap_or_default();

    QUESTIONS_PROMPT_TEMPLATE
        .replace("{job_role}", job_role.trim())
        .replace("{company_clause}", &company_clause)
}

/// Asks the LLM for questions. Unusable output yields the fallback set; a failed call is an error.
pub async fn generate_questions(
    llm: &LlmClient,
    job_role: &str,
    company_name: Option<&str>,
) -> Result<Extraction<Vec<InterviewQuestion>>, AppError> {
    let prompt = build_prompt(job_role, company_name);
    let text = llm
        .call_text(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    Ok(Extraction::parse_or_fallback(
        "interview questions",
        &text,
        parse_questions,
        fallback_questions,
    ))
}

/// Inserts one row per question in a single transaction.
pub async fn store_questions(
    pool: &PgPool,
    user_id: Uuid,
    job_title: &str,
    company_name: Option<&str>,
    questions: &[InterviewQuestion],
) -> Result<Vec<InterviewQuestionRow>, AppError> {
    let mut tx = pool.begin().await?;
    let mut rows = Vec::with_capacity(questions.len());

    for q in questions {
        let row = sqlx::query_as::<_, InterviewQuestionRow>(
            r#"
            INSERT INTO interview_questions
                (id, user_id, question, category, job_title, company_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&q.question)
        .bind(q.category.as_str())
        .bind(job_title.trim())
        .bind(company_name)
        .fetch_one(&mut *tx)
        .await?;
        rows.push(row);
    }

    tx.commit().await?;
    info!("Stored {} interview questions for user {user_id}", rows.len());
    Ok(rows)
}

pub async fn list_questions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<InterviewQuestionRow>, AppError> {
    Ok(sqlx::query_as::<_, InterviewQuestionRow>(
        "SELECT * FROM interview_questions WHERE user_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Sets or clears the answer on a question owned by `user_id`.
pub async fn update_answer(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    answer: Option<&str>,
) -> Result<InterviewQuestionRow, AppError> {
    sqlx::query_as::<_, InterviewQuestionRow>(
        "UPDATE interview_questions SET answer = $1 WHERE id = $2 AND user_id = $3 RETURNING *",
    )
    .bind(answer)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview question {id} not found")))
}

pub async fn delete_question(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM interview_questions WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Interview question {id} not found"
        )));
    }
    Ok(())
}
