// Default question bank, inserted the first time a class level has no questions.

use serde_json::{json, Map, Value};

/// A question ready for INSERT into `quiz_questions`.
#[derive(Debug, Clone)]
pub struct SeedQuestion {
    pub question_text: &'static str,
    pub options: &'static [(&'static str, &'static str)],
    pub class_level: String,
    /// Index in the bank; stored so questions are served in authored order.
    pub position: i32,
}

impl SeedQuestion {
    pub fn options_json(&self) -> Value {
        json!(self.options.iter().map(|(o, _)| *o).collect::<Vec<_>>())
    }

    pub fn mapping_json(&self) -> Value {
        let map: Map<String, Value> = self
            .options
            .iter()
            .map(|(o, c)| (o.to_string(), Value::String(c.to_string())))
            .collect();
        Value::Object(map)
    }
}

const TENTH_GRADE: &[(&str, &[(&str, &str)])] = &[
    (
        "Which subject do you enjoy the most?",
        &[
            ("Mathematics", "mpc"),
            ("Science", "bipc"),
            ("Languages", "arts"),
            ("Arts", "arts"),
            ("Social Studies", "commerce"),
        ],
    ),
    (
        "What type of activities do you prefer?",
        &[
            ("Problem solving", "mpc"),
            ("Experiments", "bipc"),
            ("Creative writing", "arts"),
            ("Drawing/Painting", "arts"),
            ("Business activities", "commerce"),
        ],
    ),
    (
        "Which career field attracts you most?",
        &[
            ("Engineering", "mpc"),
            ("Medicine", "bipc"),
            ("Teaching", "arts"),
            ("Arts & Design", "arts"),
            ("Business", "commerce"),
        ],
    ),
];

const SENIOR_GRADE: &[(&str, &[(&str, &str)])] = &[
    (
        "What is your preferred study approach?",
        &[
            ("Theoretical concepts", "engineering"),
            ("Practical applications", "technology"),
            ("Research work", "science"),
            ("Creative projects", "arts"),
            ("Business cases", "management"),
        ],
    ),
    (
        "Which work environment appeals to you?",
        &[
            ("Lab/Technical", "engineering"),
            ("Corporate office", "management"),
            ("Healthcare", "medical"),
            ("Educational institution", "education"),
            ("Creative studio", "arts"),
        ],
    ),
];

/// Default questions for a class level. `10th` gets the stream-selection bank;
/// every other level gets the degree-selection bank, tagged with that level.
pub fn default_questions(class_level: &str) -> Vec<SeedQuestion> {
    let bank = if class_level == "10th" {
        TENTH_GRADE
    } else {
        SENIOR_GRADE
    };
    (0_i32..)
        .zip(bank)
        .map(|(position, &(text, options))| SeedQuestion {
            question_text: text,
            options,
            class_level: class_level.to_string(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::QuizQuestionRow;
    use crate::quiz::models::Question;
    use uuid::Uuid;

    fn as_question(seed: &SeedQuestion) -> Question {
        Question::try_from(QuizQuestionRow {
            id: Uuid::new_v4(),
            question_text: seed.question_text.to_string(),
            options: seed.options_json(),
            mapping: seed.mapping_json(),
            class_level: Some(seed.class_level.clone()),
            position: seed.position,
        })
        .unwrap()
    }

    #[test]
    fn test_tenth_grade_bank_has_three_questions() {
        assert_eq!(default_questions("10th").len(), 3);
    }

    #[test]
    fn test_positions_follow_authored_order() {
        let seeds = default_questions("10th");
        let positions: Vec<_> = seeds.iter().map(|s| s.position).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(seeds[0].question_text, "Which subject do you enjoy the most?");
        assert_eq!(seeds[2].question_text, "Which career field attracts you most?");
    }

    #[test]
    fn test_other_levels_get_senior_bank_tagged_with_level() {
        let seeds = default_questions("Intermediate");
        assert_eq!(seeds.len(), 2);
        assert!(seeds.iter().all(|s| s.class_level == "Intermediate"));
    }

    #[test]
    fn test_every_seed_option_is_mapped() {
        for level in ["10th", "12th"] {
            for seed in default_questions(level) {
                let q = as_question(&seed);
                for option in &q.options {
                    assert!(q.mapping.contains_key(option), "{option} unmapped");
                }
            }
        }
    }

    #[test]
    fn test_tenth_grade_bank_covers_four_streams() {
        let mut codes: Vec<_> = default_questions("10th")
            .iter()
            .flat_map(|s| s.options.iter().map(|(_, c)| *c))
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec!["arts", "bipc", "commerce", "mpc"]);
    }
}
