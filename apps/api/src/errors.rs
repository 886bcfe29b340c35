use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::quiz::QuizError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Quiz(e) => match e {
                QuizError::IncompleteSubmission { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "INCOMPLETE_SUBMISSION")
                }
                QuizError::EmptyQuiz => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_QUIZ"),
                QuizError::InvalidOptionSelection { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_OPTION")
                }
                QuizError::UnknownQuestion(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_QUESTION"),
                QuizError::MalformedQuestion { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "MALFORMED_QUESTION")
                }
            },
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Quiz(QuizError::MalformedQuestion { .. }) => {
                tracing::error!("Question bank error: {self}");
                "The quiz could not be loaded".to_string()
            }
            AppError::Quiz(e) => e.to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "A database error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_submission_maps_to_422() {
        let err = AppError::from(QuizError::IncompleteSubmission {
            answered: 2,
            total: 3,
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_option_maps_to_400() {
        let err = AppError::from(QuizError::InvalidOptionSelection {
            question_id: uuid::Uuid::nil(),
            option: "Juggling".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Roadmap MPC not found".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
