use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One resume optimization run. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeOptimizationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_description: String,
    pub original_resume: String,
    pub optimized_resume: String,
    pub cover_letter: String,
    pub match_score: i32,
    pub matched_keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}
