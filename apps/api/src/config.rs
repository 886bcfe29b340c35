use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// When absent, suggestion generation always degrades to the fallback table.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub suggestion_timeout: Duration,
    pub quiz_question_limit: i64,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggestion_timeout: Duration::from_secs(parse_env("SUGGESTION_TIMEOUT_SECS", 15)?),
            quiz_question_limit: require_positive(
                "QUIZ_QUESTION_LIMIT",
                parse_env("QUIZ_QUESTION_LIMIT", 10)?,
            )?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid value, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Rejects zero and negative values for settings used as SQL limits.
fn require_positive(key: &str, value: i64) -> Result<i64> {
    ensure!(value >= 1, "{key} must be at least 1, got {value}");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_limit_accepts_positive_values() {
        assert_eq!(require_positive("QUIZ_QUESTION_LIMIT", 1).unwrap(), 1);
        assert_eq!(require_positive("QUIZ_QUESTION_LIMIT", 10).unwrap(), 10);
    }

    #[test]
    fn test_question_limit_rejects_zero_and_negative() {
        let err = require_positive("QUIZ_QUESTION_LIMIT", 0).unwrap_err();
        assert!(err.to_string().contains("QUIZ_QUESTION_LIMIT must be at least 1"));
        assert!(require_positive("QUIZ_QUESTION_LIMIT", -5).is_err());
    }
}
