// Quiz Scoring & Recommendation Engine.
// Pure engine: models, answers, scoring, suggestions. No I/O except the
// suggestion generator call, which always degrades to the fallback table.
// repository + handlers + seed wire the engine to PostgreSQL and Axum.

use thiserror::Error;
use uuid::Uuid;

pub mod answers;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod repository;
pub mod scoring;
pub mod seed;
pub mod suggestions;

/// Errors raised by the scoring engine. Suggestion failures are not here:
/// they are recovered inside `suggestions::resolve_suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Incomplete quiz: {answered} of {total} questions answered")]
    IncompleteSubmission { answered: usize, total: usize },

    #[error("Quiz has no questions")]
    EmptyQuiz,

    #[error("Option '{option}' is not offered by question {question_id}")]
    InvalidOptionSelection { question_id: Uuid, option: String },

    #[error("Question {0} is not part of this quiz")]
    UnknownQuestion(Uuid),

    #[error("Question {question_id} is malformed: {reason}")]
    MalformedQuestion { question_id: Uuid, reason: String },
}
