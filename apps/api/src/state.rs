use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::Authenticator;
use crate::llm_client::LlmClient;
use crate::optimization::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Resolves bearer tokens. Default: SessionAuthenticator over `auth_sessions`.
    pub auth: Arc<dyn Authenticator>,
    /// Pluggable match scorer. Default: RandomMatchScorer. Swap via MATCH_SCORER.
    pub match_scorer: Arc<dyn MatchScorer>,
}
