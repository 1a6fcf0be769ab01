// Resume review prompt templates.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_PLACEHOLDERS_INSTRUCTION};

pub const REVIEWER_PERSONA: &str = "\
You are an expert resume reviewer. Analyze the following resume text extracted from a document \
and provide detailed professional feedback.";

/// The reply shape the model must produce. Mirrors `AnalysisResult`.
pub const RESPONSE_SCHEMA: &str = r#"Format your response as a JSON object with the following structure:
{
  "scores": {
    "overall": <integer 0-100>,
    "content": <integer 0-100>,
    "formatting": <integer 0-100>,
    "keywords": <integer 0-100>
  },
  "summary": "<brief overall assessment>",
  "strengths": ["<strength 1>", "<strength 2>", ...],
  "weaknesses": ["<weakness 1>", "<weakness 2>", ...],
  "sections": [
    {
      "title": "<section name>",
      "feedback": "<detailed feedback>",
      "improvements": ["<suggestion 1>", "<suggestion 2>", ...]
    }
  ],
  "keywords": {
    "matched": ["<keyword 1>", "<keyword 2>", ...],
    "missing": ["<suggested keyword 1>", "<suggested keyword 2>", ...]
  },
  "improvement_suggestions": "<detailed paragraphs with suggestions for improvement>"
}
Every array must be present, even if empty. Keywords must not repeat within a list."#;

const STYLE_INSTRUCTION: &str =
    "Be detailed but concise in your feedback. Focus on actionable improvements.";

/// Builds the full review prompt. The resume text is appended verbatim as the
/// last thing the model reads; no truncation or escaping happens here.
pub fn build_review_prompt(resume_text: &str) -> String {
    format!(
        "{REVIEWER_PERSONA}\n\n{RESPONSE_SCHEMA}\n\n{NO_PLACEHOLDERS_INSTRUCTION}\n{JSON_ONLY_INSTRUCTION}\n{STYLE_INSTRUCTION}\n\nResume text:\n{resume_text}"
    )
}
