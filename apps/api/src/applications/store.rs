use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, JobApplicationRow};

/// Body for both create and full update.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInput {
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub applied_date: Option<NaiveDate>,
}

/// Input after trimming and defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidApplication {
    pub company_name: String,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub applied_date: NaiveDate,
}

impl ApplicationInput {
    pub fn validate(self, today: NaiveDate) -> Result<ValidApplication, AppError> {
        let company_name = self.company_name.trim().to_string();
        let job_title = self.job_title.trim().to_string();

        if company_name.is_empty() {
            return Err(AppError::Validation("company_name cannot be empty".to_string()));
        }
        if job_title.is_empty() {
            return Err(AppError::Validation("job_title cannot be empty".to_string()));
        }

        Ok(ValidApplication {
            company_name,
            job_title,
            status: self.status,
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            applied_date: self.applied_date.unwrap_or(today),
        })
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn create_application(
    pool: &PgPool,
    user_id: Uuid,
    app: &ValidApplication,
) -> Result<JobApplicationRow, AppError> {
    Ok(sqlx::query_as::<_, JobApplicationRow>(
        r#"
        INSERT INTO job_applications
            (id, user_id, company_name, job_title, status, notes, applied_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&app.company_name)
    .bind(&app.job_title)
    .bind(app.status.as_str())
    .bind(&app.notes)
    .bind(app.applied_date)
    .fetch_one(pool)
    .await?)
}

pub async fn list_applications(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<JobApplicationRow>, AppError> {
    Ok(sqlx::query_as::<_, JobApplicationRow>(
        r#"
        SELECT * FROM job_applications
        WHERE user_id = $1
        ORDER BY applied_date DESC, created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Replaces the editable fields. Concurrent writers: last write wins.
pub async fn update_application(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    app: &ValidApplication,
) -> Result<JobApplicationRow, AppError> {
    sqlx::query_as::<_, JobApplicationRow>(
        r#"
        UPDATE job_applications
        SET company_name = $1, job_title = $2, status = $3, notes = $4,
            applied_date = $5, updated_at = NOW()
        WHERE id = $6 AND user_id = $7
        RETURNING *
        "#,
    )
    .bind(&app.company_name)
    .bind(&app.job_title)
    .bind(app.status.as_str())
    .bind(&app.notes)
    .bind(app.applied_date)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))
}

pub async fn delete_application(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM job_applications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }
    Ok(())
}
