//! Keyword extraction — asks the model for a JSON array of job-description keywords.
//!
//! Unusable model output is replaced by `FALLBACK_KEYWORDS`. A failed upstream call is not
//! recovered here; it fails the optimization request.

use std::collections::HashSet;

use thiserror::Error;

use crate::errors::AppError;
use crate::llm_client::extraction::Extraction;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::optimization::prompts::KEYWORDS_PROMPT_TEMPLATE;

/// Substituted when the model's keyword list cannot be parsed.
pub const FALLBACK_KEYWORDS: [&str; 5] = [
    "leadership",
    "communication",
    "problem-solving",
    "teamwork",
    "project management",
];

#[derive(Debug, Error)]
pub enum KeywordParseError {
    #[error("not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("keyword array is empty")]
    Empty,
}

pub fn fallback_keywords() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Parses model output into a trimmed, de-duplicated keyword list (first spelling wins).
pub fn parse_keywords(text: &str) -> Result<Vec<String>, KeywordParseError> {
    let raw: Vec<String> = serde_json::from_str(strip_json_fences(text))?;

    let mut seen = HashSet::new();
    let keywords: Vec<String> = raw
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .collect();

    if keywords.is_empty() {
        return Err(KeywordParseError::Empty);
    }
    Ok(keywords)
}

/// Extracts keywords from a job description via the LLM.
pub async fn extract_keywords(
    job_description: &str,
    llm: &LlmClient,
) -> Result<Extraction<Vec<String>>, AppError> {
    let prompt = KEYWORDS_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    let text = llm
        .call_text(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword extraction failed: {e}")))?;

    Ok(Extraction::parse_or_fallback(
        "keywords",
        &text,
        parse_keywords,
        fallback_keywords,
    ))
}
