use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Number of clarifying questions every generation must yield.
pub const CLARIFYING_QUESTION_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClarifyingQuestion {
    pub question: String,
    pub placeholder: String,
}

impl ClarifyingQuestion {
    /// Reads one question object out of oracle JSON, requiring both fields as non-blank strings.
    pub fn from_json(value: &serde_json::Value) -> AppResult<Self> {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };

        match (field("question"), field("placeholder")) {
            (Some(question), Some(placeholder)) => Ok(ClarifyingQuestion {
                question,
                placeholder,
            }),
            _ => Err(AppError::UnexpectedShape(
                "Each question must have \"question\" and \"placeholder\" fields".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_reads_both_fields() {
        let value = json!({
            "question": "Which era interests you most?",
            "placeholder": "e.g., bebop, swing"
        });

        let question = ClarifyingQuestion::from_json(&value).unwrap();
        assert_eq!(question.question, "Which era interests you most?");
        assert_eq!(question.placeholder, "e.g., bebop, swing");
    }

    #[test]
    fn from_json_rejects_missing_or_blank_fields() {
        let missing = json!({ "question": "Which era?" });
        let blank = json!({ "question": "Which era?", "placeholder": "  " });
        let wrong_type = json!({ "question": 7, "placeholder": "e.g." });

        for value in [missing, blank, wrong_type] {
            assert!(matches!(
                ClarifyingQuestion::from_json(&value),
                Err(AppError::UnexpectedShape(_))
            ));
        }
    }
}
