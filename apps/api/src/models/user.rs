use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Class level assumed when a profile has not recorded one.
pub const DEFAULT_CLASS_LEVEL: &str = "10th";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub class_completed: Option<String>,
    pub stream: Option<String>,
    pub district: Option<String>,
    pub language: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// The class level that selects quiz questions and colleges for this user.
    pub fn class_level(&self) -> &str {
        class_level_or_default(self.class_completed.as_deref())
    }
}

/// Resolves a possibly-missing class level to the quiz default.
pub fn class_level_or_default(class_completed: Option<&str>) -> &str {
    match class_completed.map(str::trim) {
        Some(level) if !level.is_empty() => level,
        _ => DEFAULT_CLASS_LEVEL,
    }
}
