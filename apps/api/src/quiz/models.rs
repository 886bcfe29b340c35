use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::models::quiz::QuizQuestionRow;
use crate::quiz::QuizError;

/// A quiz question as seen by the engine. Built from a `QuizQuestionRow` and
/// never mutated for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    /// option label → category code
    pub mapping: BTreeMap<String, String>,
    pub class_level: Option<String>,
}

impl Question {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Category code for an option: the mapped code, or the lower-cased label
    /// when the mapping has no entry or a blank one. Returns `None` for
    /// undeclared options.
    pub fn category_for(&self, option: &str) -> Option<String> {
        if !self.offers(option) {
            return None;
        }
        Some(
            self.mapping
                .get(option)
                .filter(|category| !category.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| option.to_lowercase()),
        )
    }
}

impl TryFrom<QuizQuestionRow> for Question {
    type Error = QuizError;

    fn try_from(row: QuizQuestionRow) -> Result<Self, Self::Error> {
        let malformed = |reason: String| QuizError::MalformedQuestion {
            question_id: row.id,
            reason,
        };

        let options: Vec<String> = serde_json::from_value(row.options.clone())
            .map_err(|e| malformed(format!("options must be a list of strings: {e}")))?;
        if options.is_empty() {
            return Err(malformed("question offers no options".to_string()));
        }

        let mapping: BTreeMap<String, String> = if row.mapping.is_null() {
            BTreeMap::new()
        } else {
            serde_json::from_value(row.mapping.clone())
                .map_err(|e| malformed(format!("mapping must be an object of strings: {e}")))?
        };

        Ok(Question {
            id: row.id,
            text: row.question_text,
            options,
            mapping,
            class_level: row.class_level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: Uuid,
    pub selected_option: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// Per-category answer counts, kept in first-occurrence order.
/// Categories nobody picked are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<CategoryCount>,
}

impl Tally {
    pub fn increment(&mut self, category: &str) {
        match self.counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.counts.iter()
    }

    /// Highest count wins; on a tie the category that appeared first wins.
    pub fn leader(&self) -> Option<&CategoryCount> {
        self.counts.iter().fold(None, |best, c| match best {
            Some(b) if b.count >= c.count => Some(b),
            _ => Some(c),
        })
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for c in &self.counts {
            map.serialize_entry(&c.category, &c.count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub recommended_category: String,
    /// Integer percentage, 0–100.
    pub confidence_score: u8,
    pub tally: Tally,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(options: serde_json::Value, mapping: serde_json::Value) -> QuizQuestionRow {
        QuizQuestionRow {
            id: Uuid::new_v4(),
            question_text: "Which subject do you enjoy the most?".to_string(),
            options,
            mapping,
            class_level: Some("10th".to_string()),
            position: 0,
        }
    }

    #[test]
    fn test_row_converts_to_question() {
        let q = Question::try_from(row(
            json!(["Mathematics", "Science"]),
            json!({"Mathematics": "mpc", "Science": "bipc"}),
        ))
        .unwrap();
        assert_eq!(q.options, vec!["Mathematics", "Science"]);
        assert_eq!(q.mapping.get("Science").map(String::as_str), Some("bipc"));
    }

    #[test]
    fn test_null_mapping_is_empty() {
        let q = Question::try_from(row(json!(["Arts"]), serde_json::Value::Null)).unwrap();
        assert!(q.mapping.is_empty());
        assert_eq!(q.category_for("Arts").as_deref(), Some("arts"));
    }

    #[test]
    fn test_non_string_options_are_rejected() {
        let err = Question::try_from(row(json!([1, 2]), json!({}))).unwrap_err();
        assert!(matches!(err, QuizError::MalformedQuestion { .. }));
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let err = Question::try_from(row(json!([]), json!({}))).unwrap_err();
        assert!(matches!(err, QuizError::MalformedQuestion { .. }));
    }

    #[test]
    fn test_category_for_undeclared_option_is_none() {
        let q = Question::try_from(row(json!(["Mathematics"]), json!({"Mathematics": "mpc"})))
            .unwrap();
        assert_eq!(q.category_for("Cooking"), None);
    }

    #[test]
    fn test_unmapped_option_is_lowercased() {
        let q = Question::try_from(row(
            json!(["Mathematics", "Social Studies"]),
            json!({"Mathematics": "mpc"}),
        ))
        .unwrap();
        assert_eq!(q.category_for("Social Studies").as_deref(), Some("social studies"));
    }

    #[test]
    fn test_blank_mapped_category_falls_back_to_lowercased_label() {
        let q = Question::try_from(row(
            json!(["Mathematics", "Languages"]),
            json!({"Mathematics": "", "Languages": "  "}),
        ))
        .unwrap();
        assert_eq!(q.category_for("Mathematics").as_deref(), Some("mathematics"));
        assert_eq!(q.category_for("Languages").as_deref(), Some("languages"));
    }

    #[test]
    fn test_tally_keeps_first_occurrence_order() {
        let mut tally = Tally::default();
        assert!(tally.is_empty());
        for c in ["bipc", "mpc", "bipc", "arts"] {
            tally.increment(c);
        }
        let order: Vec<_> = tally.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["bipc", "mpc", "arts"]);
        assert_eq!(tally.get("bipc"), Some(2));
        assert_eq!(tally.get("commerce"), None);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_leader_breaks_ties_by_first_occurrence() {
        let mut tally = Tally::default();
        for c in ["commerce", "arts", "arts", "commerce"] {
            tally.increment(c);
        }
        assert_eq!(tally.leader().unwrap().category, "commerce");
    }

    #[test]
    fn test_tally_serializes_as_ordered_object() {
        let mut tally = Tally::default();
        tally.increment("mpc");
        tally.increment("bipc");
        tally.increment("mpc");
        assert_eq!(
            serde_json::to_string(&tally).unwrap(),
            r#"{"mpc":2,"bipc":1}"#
        );
    }
}
