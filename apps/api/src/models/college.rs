use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollegeRow {
    pub id: Uuid,
    pub name: String,
    pub district: String,
    pub eligibility: Option<String>,
    pub programs: Value,
    pub facilities: Option<Value>,
    pub contact: Option<Value>,
    pub created_at: DateTime<Utc>,
}
