use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::profiles::repository::{fetch_user, upsert_user, ProfileUpdate};
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub class_completed: Option<String>,
    pub stream: Option<String>,
    pub district: Option<String>,
    pub language: Option<String>,
}

/// Blank strings are stored as NULL.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// GET /api/v1/users/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserRow>, AppError> {
    let user = fetch_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserRow>, AppError> {
    let update = ProfileUpdate {
        name: non_blank(&req.name),
        class_completed: non_blank(&req.class_completed),
        stream: non_blank(&req.stream),
        district: non_blank(&req.district),
        language: non_blank(&req.language).unwrap_or(DEFAULT_LANGUAGE),
    };

    let user = upsert_user(&state.db, user_id, update).await?;
    info!("Profile saved for user {user_id}");
    Ok(Json(user))
}
