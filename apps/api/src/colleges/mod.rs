//! College directory: government colleges near the student that accept
//! the qualification they are working towards.
//!
//! Eligibility is exact list membership: each completed class level unlocks a
//! fixed set of eligibility labels, and a college matches only when its
//! `eligibility` equals one of them.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::CollegeRow;
use crate::profiles::repository::fetch_user;
use crate::state::AppState;

/// Eligibility labels reachable after completing a class level.
pub fn next_eligibility(class_completed: &str) -> &'static [&'static str] {
    match class_completed.trim() {
        "10th" => &["Intermediate qualification", "SSC Qualification"],
        "Intermediate" => &[
            "Bachelor's qualification",
            "JEE Main Qualified",
            "NEET Qualified",
        ],
        _ => &[],
    }
}

/// Escapes LIKE wildcards so a district name is matched literally.
fn like_pattern(district: &str) -> String {
    let escaped = district
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub async fn find_colleges(
    pool: &PgPool,
    district: &str,
    eligibility: &[&str],
) -> Result<Vec<CollegeRow>, sqlx::Error> {
    if eligibility.is_empty() {
        return Ok(Vec::new());
    }
    let eligibility: Vec<String> = eligibility.iter().map(|e| e.to_string()).collect();

    sqlx::query_as::<_, CollegeRow>(
        r#"
        SELECT * FROM colleges
        WHERE district ILIKE $1
          AND eligibility = ANY($2)
        ORDER BY name
        "#,
    )
    .bind(like_pattern(district))
    .bind(&eligibility)
    .fetch_all(pool)
    .await
}

#[derive(Debug, Deserialize)]
pub struct CollegeQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CollegeListResponse {
    pub district: String,
    pub eligibility: Vec<String>,
    pub colleges: Vec<CollegeRow>,
}

/// GET /api/v1/colleges?user_id=
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    Query(params): Query<CollegeQuery>,
) -> Result<Json<CollegeListResponse>, AppError> {
    let user = fetch_user(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    let district = user.district.clone().unwrap_or_default();
    let eligibility = next_eligibility(user.class_completed.as_deref().unwrap_or_default());
    let colleges = find_colleges(&state.db, &district, eligibility).await?;

    Ok(Json(CollegeListResponse {
        district,
        eligibility: eligibility.iter().map(|e| e.to_string()).collect(),
        colleges,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenth_unlocks_intermediate_and_ssc() {
        assert_eq!(
            next_eligibility("10th"),
            ["Intermediate qualification", "SSC Qualification"]
        );
    }

    #[test]
    fn test_intermediate_unlocks_degree_entrances() {
        let labels = next_eligibility("Intermediate");
        assert_eq!(labels.len(), 3);
        assert!(labels.contains(&"NEET Qualified"));
    }

    #[test]
    fn test_unknown_level_unlocks_nothing() {
        assert!(next_eligibility("12th").is_empty());
        assert!(next_eligibility("").is_empty());
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern(" Guntur "), "%Guntur%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
