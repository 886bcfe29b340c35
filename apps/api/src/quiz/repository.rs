use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::quiz::{QuizQuestionRow, QuizResultRow};
use crate::quiz::models::Recommendation;
use crate::quiz::seed::default_questions;

const SELECT_QUESTIONS: &str =
    "SELECT * FROM quiz_questions WHERE class_level = $1 ORDER BY position, id LIMIT $2";

/// Returns up to `limit` questions for a class level.
pub async fn fetch_questions(
    pool: &PgPool,
    class_level: &str,
    limit: i64,
) -> Result<Vec<QuizQuestionRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizQuestionRow>(SELECT_QUESTIONS)
        .bind(class_level)
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Inserts the default question bank for a class level unless the level already
/// has questions. Serialized per class level with a transaction-scoped advisory lock.
/// The existence check ignores `limit`, so a level is seeded at most once.
pub async fn seed_default_questions(
    pool: &PgPool,
    class_level: &str,
    limit: i64,
) -> Result<Vec<QuizQuestionRow>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(class_level)
        .execute(&mut *tx)
        .await?;

    let seeded = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM quiz_questions WHERE class_level = $1)",
    )
    .bind(class_level)
    .fetch_one(&mut *tx)
    .await?;
    if seeded {
        let existing = sqlx::query_as::<_, QuizQuestionRow>(SELECT_QUESTIONS)
            .bind(class_level)
            .bind(limit)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        return Ok(existing);
    }

    let mut inserted = Vec::new();
    for seed in default_questions(class_level) {
        let row = sqlx::query_as::<_, QuizQuestionRow>(
            r#"
            INSERT INTO quiz_questions (question_text, options, mapping, class_level, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(seed.question_text)
        .bind(seed.options_json())
        .bind(seed.mapping_json())
        .bind(&seed.class_level)
        .bind(seed.position)
        .fetch_one(&mut *tx)
        .await?;
        inserted.push(row);
    }

    tx.commit().await?;
    info!(
        "Seeded {} default quiz questions for class level {class_level}",
        inserted.len()
    );

    inserted.truncate(usize::try_from(limit).unwrap_or(0));
    Ok(inserted)
}

/// Persists a scored submission. Rows are append-only: one per submission.
pub async fn insert_result(
    pool: &PgPool,
    user_id: Uuid,
    recommendation: &Recommendation,
    suggestions: &[String],
) -> Result<QuizResultRow, sqlx::Error> {
    sqlx::query_as::<_, QuizResultRow>(
        r#"
        INSERT INTO quiz_results (user_id, result_stream, confidence_score, suggested_courses)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&recommendation.recommended_category)
    .bind(i32::from(recommendation.confidence_score))
    .bind(serde_json::json!(suggestions))
    .fetch_one(pool)
    .await
}

/// Returns a user's results, oldest first.
pub async fn list_results(pool: &PgPool, user_id: Uuid) -> Result<Vec<QuizResultRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizResultRow>(
        "SELECT * FROM quiz_results WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
