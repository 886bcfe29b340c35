//! Course suggestions: pluggable generator with a static fallback table.
//!
//! `resolve_suggestions` makes exactly one generator attempt, bounded by a
//! timeout. Any failure degrades to `FALLBACK_TABLE`; it never returns an error.
//! Generated and fallback entries are never merged.
//!
//! `AppState` holds an `Arc<dyn SuggestionGenerator>`, chosen at startup from config.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::quiz::prompts::{build_suggestion_prompt, SUGGESTION_SYSTEM};

/// Upper bound on generated suggestions kept per category.
pub const MAX_SUGGESTIONS: usize = 5;

/// Returned when a category has no fallback entry.
pub const GENERIC_PLACEHOLDER: &str = "General degree courses";

const FALLBACK_TABLE: &[(&str, &[&str])] = &[
    ("mpc", &["B.Tech Computer Science", "B.Tech Mechanical", "B.Sc Physics"]),
    ("bipc", &["MBBS", "B.Pharmacy", "B.Sc Biology"]),
    ("commerce", &["B.Com", "BBA", "CA Foundation"]),
    ("arts", &["B.A English", "B.A History", "B.Ed"]),
    ("engineering", &["B.Tech", "BE", "Diploma Engineering"]),
    ("medical", &["MBBS", "BDS", "BHMS"]),
    ("management", &["BBA", "B.Com", "Hotel Management"]),
];

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("suggestion generator is not configured")]
    Unavailable,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("generator returned no usable suggestions")]
    Empty,

    #[error("generator timed out after {0:?}")]
    Timeout(Duration),
}

/// The suggestion generator trait. Implement this to swap backends without
/// touching the submission handler.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    async fn generate(
        &self,
        category: &str,
        grade_level: &str,
    ) -> Result<Vec<String>, SuggestionError>;
}

#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    suggestions: Vec<String>,
}

/// Generates suggestions through the shared `LlmClient`.
pub struct LlmSuggestionGenerator(pub LlmClient);

#[async_trait]
impl SuggestionGenerator for LlmSuggestionGenerator {
    async fn generate(
        &self,
        category: &str,
        grade_level: &str,
    ) -> Result<Vec<String>, SuggestionError> {
        let prompt = build_suggestion_prompt(category, grade_level);
        let system = format!("{SUGGESTION_SYSTEM} {JSON_ONLY_SYSTEM}");
        let payload: SuggestionPayload = self.0.call_json(&prompt, &system).await?;
        Ok(payload.suggestions)
    }
}

/// Used when no API key is configured: every call reports unavailability.
pub struct UnavailableGenerator;

#[async_trait]
impl SuggestionGenerator for UnavailableGenerator {
    async fn generate(&self, _category: &str, _grade_level: &str) -> Result<Vec<String>, SuggestionError> {
        Err(SuggestionError::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Generated,
    Fallback,
}

/// Usable suggestions either way; the variant records where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Generated(Vec<String>),
    Fallback(Vec<String>),
}

impl SuggestionOutcome {
    #[cfg(test)]
    pub fn suggestions(&self) -> &[String] {
        match self {
            SuggestionOutcome::Generated(s) | SuggestionOutcome::Fallback(s) => s,
        }
    }

    pub fn into_suggestions(self) -> Vec<String> {
        match self {
            SuggestionOutcome::Generated(s) | SuggestionOutcome::Fallback(s) => s,
        }
    }

    pub fn source(&self) -> SuggestionSource {
        match self {
            SuggestionOutcome::Generated(_) => SuggestionSource::Generated,
            SuggestionOutcome::Fallback(_) => SuggestionSource::Fallback,
        }
    }
}

/// Resolves course suggestions for a recommended category. Never fails.
pub async fn resolve_suggestions(
    generator: &dyn SuggestionGenerator,
    category: &str,
    grade_level: &str,
    timeout: Duration,
) -> SuggestionOutcome {
    let attempt = tokio::time::timeout(timeout, generator.generate(category, grade_level))
        .await
        .unwrap_or(Err(SuggestionError::Timeout(timeout)))
        .and_then(clean_suggestions);

    match attempt {
        Ok(suggestions) => {
            info!(
                "Generated {} suggestions for category '{category}'",
                suggestions.len()
            );
            SuggestionOutcome::Generated(suggestions)
        }
        Err(e) => {
            warn!("Suggestion generation failed for category '{category}', using fallback: {e}");
            SuggestionOutcome::Fallback(fallback_suggestions(category))
        }
    }
}

/// Static course list for a category, or the single generic placeholder.
pub fn fallback_suggestions(category: &str) -> Vec<String> {
    FALLBACK_TABLE
        .iter()
        .find(|(code, _)| *code == category)
        .map(|(_, courses)| courses.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| vec![GENERIC_PLACEHOLDER.to_string()])
}

/// Trims entries, drops blanks and duplicates, caps at `MAX_SUGGESTIONS`.
fn clean_suggestions(raw: Vec<String>) -> Result<Vec<String>, SuggestionError> {
    let mut cleaned: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    for s in raw {
        let s = s.trim();
        if s.is_empty() || cleaned.iter().any(|c| c == s) {
            continue;
        }
        cleaned.push(s.to_string());
        if cleaned.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    if cleaned.is_empty() {
        return Err(SuggestionError::Empty);
    }
    Ok(cleaned)
}
