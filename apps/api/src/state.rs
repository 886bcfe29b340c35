use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::quiz::suggestions::SuggestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable course-suggestion backend. LLM-backed when an API key is configured.
    pub suggester: Arc<dyn SuggestionGenerator>,
}
