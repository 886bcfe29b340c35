//! Quiz scoring: tallies resolved categories and picks the plurality stream.
//!
//! Algorithm:
//! 1. Reject unless every question has exactly one answer (|answers| == |questions|).
//! 2. Tally: one pass over the answers, counting each resolved category.
//! 3. Winner: highest count; ties go to the category that appeared first among the answers.
//! 4. confidence = round(100 × winner_count / total_answers)
//!
//! Pure and synchronous: no I/O, no randomness.

use crate::quiz::answers::AnswerSet;
use crate::quiz::models::{Question, Recommendation, Tally};
use crate::quiz::QuizError;

pub fn build_tally(answers: &AnswerSet) -> Tally {
    let mut tally = Tally::default();
    for answer in answers.iter() {
        tally.increment(&answer.category);
    }
    tally
}

/// Computes the stream recommendation for a completed quiz.
pub fn compute_recommendation(
    answers: &AnswerSet,
    questions: &[Question],
) -> Result<Recommendation, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuiz);
    }
    if answers.len() != questions.len() {
        return Err(QuizError::IncompleteSubmission {
            answered: answers.len(),
            total: questions.len(),
        });
    }

    let tally = build_tally(answers);
    let total = tally.total();
    let (category, count) = tally
        .leader()
        .map(|c| (c.category.clone(), c.count))
        .ok_or(QuizError::EmptyQuiz)?;

    Ok(Recommendation {
        recommended_category: category,
        confidence_score: confidence_percent(count, total),
        tally,
    })
}

/// Integer share of `count` in `total`, rounded half up. 0 when `total` is 0.
fn confidence_percent(count: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((f64::from(count) * 100.0) / f64::from(total))
        .round()
        .clamp(0.0, 100.0) as u8
}
