// LLM prompt constants for course suggestions.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

/// System prompt for course suggestion generation.
pub const SUGGESTION_SYSTEM: &str = "You are an academic counsellor for Indian school students \
    choosing a stream after class 10 or class 12. Recommend real, widely offered course names.";

/// Suggestion prompt template. Replace `{category}` and `{grade_level}` before sending.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"A student who has completed {grade_level} took an aptitude quiz.
Their recommended stream code is "{category}".

Suggest up to 5 course names this student should consider next.

Return a JSON object with this EXACT schema (no extra fields):
{
  "suggestions": ["B.Tech Computer Science", "B.Sc Physics"]
}

Rules:
- Course names only, no descriptions or numbering.
- Most relevant course first.
- Never more than 5 entries."#;

pub fn build_suggestion_prompt(category: &str, grade_level: &str) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{category}", category)
        .replace("{grade_level}", grade_level)
}
