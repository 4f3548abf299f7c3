use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewQuestionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub category: String,
    pub job_title: String,
    pub company_name: Option<String>,
    pub answer: Option<String>,
    pub created_at: DateTime<Utc>,
}
