use anyhow::{bail, Context, Result};

/// Which match scoring policy the optimizer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// Uniform random score in [70, 100). Ignores the inputs.
    Random,
    /// Share of extracted keywords present in the submitted resume.
    Keyword,
}

impl ScorerKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "random" => Ok(ScorerKind::Random),
            "keyword" => Ok(ScorerKind::Keyword),
            other => bail!("MATCH_SCORER must be 'random' or 'keyword', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    /// Overrides the Messages API endpoint (proxies, gateways).
    pub llm_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub match_scorer: ScorerKind,
    pub llm_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL").ok().filter(|v| !v.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_scorer: ScorerKind::parse(
                &std::env::var("MATCH_SCORER").unwrap_or_else(|_| "random".to_string()),
            )?,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_kind_parses_known_values() {
        assert_eq!(ScorerKind::parse("random").unwrap(), ScorerKind::Random);
        assert_eq!(ScorerKind::parse(" Keyword ").unwrap(), ScorerKind::Keyword);
    }

    #[test]
    fn test_scorer_kind_rejects_unknown_value() {
        let err = ScorerKind::parse("cosine").unwrap_err();
        assert!(err.to_string().contains("cosine"));
    }
}
