use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Raw `quiz_questions` row. `options` and `mapping` are untyped JSON and are
/// validated into `quiz::models::Question` before the engine sees them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizQuestionRow {
    pub id: Uuid,
    pub question_text: String,
    pub options: Value,
    pub mapping: Value,
    pub class_level: Option<String>,
    /// Authored order within the class level's bank.
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizResultRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub result_stream: Option<String>,
    pub confidence_score: Option<i32>,
    pub suggested_courses: Option<Value>,
    pub created_at: DateTime<Utc>,
}
