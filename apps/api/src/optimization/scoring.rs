//! Match scoring — pluggable, trait-based scorer for resume/job-description fit.
//!
//! Default: `RandomMatchScorer`, a placeholder that ignores its inputs and returns a
//! uniform integer in [70, 100). `KeywordMatchScorer` measures keyword coverage instead.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via `MATCH_SCORER`.

use std::sync::Arc;

use rand::Rng;

use crate::config::ScorerKind;

/// Lowest score the placeholder policy can produce.
pub const RANDOM_SCORE_MIN: u8 = 70;
/// Exclusive upper bound of the placeholder policy.
pub const RANDOM_SCORE_MAX_EXCLUSIVE: u8 = 100;

/// Implement this to swap scoring policies without touching the endpoint.
pub trait MatchScorer: Send + Sync {
    /// Returns a score in 0..=100.
    fn score(&self, resume: &str, job_description: &str, keywords: &[String]) -> u8;

    /// Label for logs.
    fn name(&self) -> &'static str;
}

pub struct RandomMatchScorer;

impl MatchScorer for RandomMatchScorer {
    fn score(&self, _resume: &str, _job_description: &str, _keywords: &[String]) -> u8 {
        rand::thread_rng().gen_range(RANDOM_SCORE_MIN..RANDOM_SCORE_MAX_EXCLUSIVE)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Percentage of keywords that occur (case-insensitively, as whole terms) in the resume text.
pub struct KeywordMatchScorer;

/// True when `term` occurs in `text` with no letter or digit directly on either side.
fn contains_term(text: &str, term: &str) -> bool {
    text.match_indices(term).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, resume: &str, _job_description: &str, keywords: &[String]) -> u8 {
        let wanted: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if wanted.is_empty() {
            return 0;
        }

        let resume_lower = resume.to_lowercase();
        let hits = wanted
            .iter()
            .filter(|k| contains_term(&resume_lower, k.as_str()))
            .count();

        ((hits as f64 / wanted.len() as f64) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

pub fn build_scorer(kind: ScorerKind) -> Arc<dyn MatchScorer> {
    match kind {
        ScorerKind::Random => Arc::new(RandomMatchScorer),
        ScorerKind::Keyword => Arc::new(KeywordMatchScorer),
    }
}
