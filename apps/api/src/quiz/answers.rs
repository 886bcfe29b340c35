use serde::Deserialize;
use uuid::Uuid;

use crate::quiz::models::{Answer, Question};
use crate::quiz::QuizError;

/// A single selection as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub question_id: Uuid,
    pub selected_option: String,
}

/// The running answers of one quiz session, at most one per question.
/// Order is the order in which each question's current answer was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `option` as the answer to `question`, replacing any earlier
    /// answer for the same question. Re-selecting the current option is a no-op.
    pub fn record_answer(&mut self, question: &Question, option: &str) -> Result<&Answer, QuizError> {
        let category = question
            .category_for(option)
            .ok_or_else(|| QuizError::InvalidOptionSelection {
                question_id: question.id,
                option: option.to_string(),
            })?;

        if let Some(pos) = self.position(question.id) {
            if self.answers[pos].selected_option == option {
                return Ok(&self.answers[pos]);
            }
            self.answers.remove(pos);
        }

        self.answers.push(Answer {
            question_id: question.id,
            selected_option: option.to_string(),
            category,
        });
        Ok(&self.answers[self.answers.len() - 1])
    }

    pub fn get(&self, question_id: Uuid) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    fn position(&self, question_id: Uuid) -> Option<usize> {
        self.answers.iter().position(|a| a.question_id == question_id)
    }
}

/// Replays submitted selections, in order, against the session's questions.
pub fn replay_answers(questions: &[Question], inputs: &[AnswerInput]) -> Result<AnswerSet, QuizError> {
    let mut answers = AnswerSet::new();
    for input in inputs {
        let question = questions
            .iter()
            .find(|q| q.id == input.question_id)
            .ok_or(QuizError::UnknownQuestion(input.question_id))?;
        answers.record_answer(question, &input.selected_option)?;
    }
    Ok(answers)
}
