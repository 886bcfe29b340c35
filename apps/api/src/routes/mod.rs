pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::colleges;
use crate::profiles::handlers as profiles;
use crate::quiz::handlers as quiz;
use crate::roadmaps;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles
        .route(
            "/api/v1/users/:id",
            get(profiles::handle_get_profile).put(profiles::handle_update_profile),
        )
        // Quiz
        .route("/api/v1/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/v1/quiz/submit", post(quiz::handle_submit))
        .route("/api/v1/quiz/results", get(quiz::handle_get_results))
        // Directory
        .route("/api/v1/colleges", get(colleges::handle_list_colleges))
        .route("/api/v1/roadmaps", get(roadmaps::handle_list_roadmaps))
        .route(
            "/api/v1/roadmaps/:stream_course",
            get(roadmaps::handle_get_roadmap),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::quiz::suggestions::UnavailableGenerator;

    /// State with a lazy pool: routes that never touch the DB can be exercised offline.
    fn test_state() -> AppState {
        let config = Config {
            database_url: "postgres://localhost/career_test".to_string(),
            anthropic_api_key: None,
            port: 0,
            rust_log: "debug".to_string(),
            suggestion_timeout: Duration::from_secs(1),
            quiz_question_limit: 10,
            db_max_connections: 1,
        };
        let db = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy(&config.database_url)
            .unwrap();
        AppState {
            db,
            config,
            suggester: Arc::new(UnavailableGenerator),
        }
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "career-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = build_router(test_state())
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_rejects_malformed_body() {
        let response = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/quiz/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"answers": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_questions_require_user_id() {
        let response = build_router(test_state())
            .oneshot(
                Request::get("/api/v1/quiz/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
