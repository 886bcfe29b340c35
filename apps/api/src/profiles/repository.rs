use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::UserRow;

/// Editable profile fields.
pub struct ProfileUpdate<'a> {
    pub name: Option<&'a str>,
    pub class_completed: Option<&'a str>,
    pub stream: Option<&'a str>,
    pub district: Option<&'a str>,
    pub language: &'a str,
}

pub async fn fetch_user(pool: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Creates the profile if missing, otherwise overwrites its editable fields.
pub async fn upsert_user(
    pool: &PgPool,
    user_id: Uuid,
    update: ProfileUpdate<'_>,
) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, name, class_completed, stream, district, language)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            class_completed = EXCLUDED.class_completed,
            stream = EXCLUDED.stream,
            district = EXCLUDED.district,
            language = EXCLUDED.language
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(update.name)
    .bind(update.class_completed)
    .bind(update.stream)
    .bind(update.district)
    .bind(update.language)
    .fetch_one(pool)
    .await
}
