use std::sync::Arc;

use crate::{
    constants::prompts::{
        clarifying_questions_user_prompt, CLARIFYING_QUESTIONS_SYSTEM_PROMPT, QUESTION_MAX_TOKENS,
        QUESTION_TEMPERATURE,
    },
    errors::{AppError, AppResult},
    models::domain::{ClarifyingQuestion, Topic, CLARIFYING_QUESTION_COUNT},
    services::oracle::{CompletionOracle, CompletionRequest},
};

pub struct QuestionService {
    oracle: Arc<dyn CompletionOracle>,
}

impl QuestionService {
    pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle for exactly three clarifying questions about `topic`.
    pub async fn generate_questions(&self, topic: &str) -> AppResult<Vec<ClarifyingQuestion>> {
        let topic = Topic::parse(topic)?;

        if !self.oracle.is_available() {
            return Err(AppError::OracleUnavailable);
        }

        let request = CompletionRequest::new(
            CLARIFYING_QUESTIONS_SYSTEM_PROMPT,
            clarifying_questions_user_prompt(topic.as_str()),
        )
        .with_temperature(QUESTION_TEMPERATURE)
        .with_max_tokens(QUESTION_MAX_TOKENS);

        let response = self.oracle.complete(request).await?;
        let questions = parse_questions(&response)?;

        log::info!(
            "Generated {} clarifying questions for topic '{}'",
            questions.len(),
            topic
        );
        Ok(questions)
    }
}

/// Strictly parses the oracle's JSON array of question objects.
pub fn parse_questions(response: &str) -> AppResult<Vec<ClarifyingQuestion>> {
    let value: serde_json::Value = serde_json::from_str(response.trim()).map_err(|e| {
        log::error!("Failed to parse questions JSON: {}", response);
        AppError::MalformedOracleOutput(e.to_string())
    })?;

    let items = value
        .as_array()
        .filter(|items| items.len() == CLARIFYING_QUESTION_COUNT)
        .ok_or_else(|| {
            AppError::UnexpectedShape(format!(
                "Expected exactly {} questions",
                CLARIFYING_QUESTION_COUNT
            ))
        })?;

    items.iter().map(ClarifyingQuestion::from_json).collect()
}
