//! Axum route handlers for the Quiz API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::quiz::QuizResultRow;
use crate::models::user::{class_level_or_default, UserRow};
use crate::profiles::repository::fetch_user;
use crate::quiz::answers::{replay_answers, AnswerInput};
use crate::quiz::models::{Question, Tally};
use crate::quiz::repository::{fetch_questions, insert_result, list_results, seed_default_questions};
use crate::quiz::scoring::compute_recommendation;
use crate::quiz::suggestions::{resolve_suggestions, SuggestionSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub class_level: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub user_id: Uuid,
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub result_id: Uuid,
    pub recommended_category: String,
    pub confidence_score: u8,
    pub tally: Tally,
    pub suggestions: Vec<String>,
    pub suggestion_source: SuggestionSource,
    pub created_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions?user_id=
///
/// Returns the question set for the user's class level, seeding the default
/// bank the first time a level has none.
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let user = fetch_user(&state.db, params.user_id).await?;
    let class_level = class_level_or_default(user.as_ref().and_then(|u| u.class_completed.as_deref()));

    let questions = load_quiz(&state.db, class_level, state.config.quiz_question_limit).await?;

    Ok(Json(QuestionsResponse {
        class_level: class_level.to_string(),
        questions,
    }))
}

/// POST /api/v1/quiz/submit
///
/// Flow: load questions → replay answers → score → resolve suggestions → persist.
/// Rejects incomplete submissions before any suggestion call is made.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitQuizRequest>,
) -> Result<Json<SubmitQuizResponse>, AppError> {
    let user: UserRow = fetch_user(&state.db, request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;
    let class_level = user.class_level();

    let questions = load_quiz(&state.db, class_level, state.config.quiz_question_limit).await?;
    let answers = replay_answers(&questions, &request.answers)?;
    let recommendation = compute_recommendation(&answers, &questions)?;
    info!(
        "Quiz scored for user {}: {} ({}%)",
        user.id, recommendation.recommended_category, recommendation.confidence_score
    );

    let outcome = resolve_suggestions(
        state.suggester.as_ref(),
        &recommendation.recommended_category,
        class_level,
        state.config.suggestion_timeout,
    )
    .await;
    let suggestion_source = outcome.source();
    let suggestions = outcome.into_suggestions();

    let row = insert_result(&state.db, user.id, &recommendation, &suggestions).await?;

    Ok(Json(SubmitQuizResponse {
        result_id: row.id,
        recommended_category: recommendation.recommended_category,
        confidence_score: recommendation.confidence_score,
        tally: recommendation.tally,
        suggestions,
        suggestion_source,
        created_at: row.created_at,
    }))
}

/// GET /api/v1/quiz/results?user_id=
///
/// Result history, oldest first. The last entry is the current recommendation.
pub async fn handle_get_results(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<QuizResultRow>>, AppError> {
    let results = list_results(&state.db, params.user_id).await?;
    Ok(Json(results))
}

/// Loads (or seeds) the questions for a class level and validates them.
async fn load_quiz(pool: &PgPool, class_level: &str, limit: i64) -> Result<Vec<Question>, AppError> {
    let mut rows = fetch_questions(pool, class_level, limit).await?;
    if rows.is_empty() {
        rows = seed_default_questions(pool, class_level, limit).await?;
    }

    let questions = rows
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(questions)
}
