use std::sync::Arc;

use crate::{
    constants::prompts::{
        module_prompts_user_prompt, MODULE_PROMPTS_SYSTEM_PROMPT, MODULE_PROMPT_MAX_TOKENS,
        MODULE_PROMPT_TEMPERATURE, NO_CLARIFICATIONS_LINE,
    },
    errors::{AppError, AppResult},
    models::domain::{Clarification, ModulePrompts, Topic},
    services::{
        oracle::{CompletionOracle, CompletionRequest},
        prompt_parser::parse_module_prompts,
    },
};

pub struct PromptService {
    oracle: Arc<dyn CompletionOracle>,
}

impl PromptService {
    pub fn new(oracle: Arc<dyn CompletionOracle>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle for seven paired module prompts and parses its reply.
    pub async fn generate_prompts(
        &self,
        topic: &str,
        clarifications: &[Clarification],
    ) -> AppResult<ModulePrompts> {
        let topic = Topic::parse(topic)?;

        if !self.oracle.is_available() {
            return Err(AppError::OracleUnavailable);
        }

        let request = CompletionRequest::new(
            MODULE_PROMPTS_SYSTEM_PROMPT,
            module_prompts_user_prompt(topic.as_str(), &clarification_lines(clarifications)),
        )
        .with_temperature(MODULE_PROMPT_TEMPERATURE)
        .with_max_tokens(MODULE_PROMPT_MAX_TOKENS);

        let response = self.oracle.complete(request).await?;
        log::debug!("Raw module prompts response: {}", response);

        let prompts = parse_module_prompts(&response).map_err(|e| {
            log::error!("Failed to parse module prompts: {}", e);
            e
        })?;

        log::info!(
            "Parsed prompts for '{}': discover={}, podcast={}, paired={}",
            topic,
            prompts.discover_sources.len(),
            prompts.create_podcast.len(),
            prompts.modules().count()
        );
        Ok(prompts)
    }
}

/// Serializes answered clarifications one per line.
pub fn clarification_lines(clarifications: &[Clarification]) -> String {
    let lines: Vec<String> = clarifications
        .iter()
        .filter(|c| c.is_answered())
        .map(Clarification::as_instruction_line)
        .collect();

    if lines.is_empty() {
        NO_CLARIFICATIONS_LINE.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::oracle::MockCompletionOracle,
        test_utils::fixtures::{numbered_section, well_formed_prompts_response},
    };

    fn clarification(question: &str, answer: &str) -> Clarification {
        Clarification {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn oracle_replying(reply: String) -> MockCompletionOracle {
        let mut oracle = MockCompletionOracle::new();
        oracle.expect_is_available().return_const(true);
        oracle
            .expect_complete()
            .times(1)
            .returning(move |_| Ok(reply.clone()));
        oracle
    }

    #[test]
    fn no_clarifications_are_stated_explicitly() {
        assert_eq!(clarification_lines(&[]), NO_CLARIFICATIONS_LINE);
        assert_eq!(
            clarification_lines(&[clarification("Which era?", "")]),
            NO_CLARIFICATIONS_LINE
        );
    }

    #[test]
    fn answered_clarifications_are_listed_in_order() {
        let lines = clarification_lines(&[
            clarification("Which era?", "bebop"),
            clarification("Depth?", " "),
            clarification("Format?", "stories"),
        ]);

        assert_eq!(lines, "– Which era?: bebop\n– Format?: stories");
    }

    #[actix_web::test]
    async fn returns_two_seven_element_sequences() {
        let mut oracle = MockCompletionOracle::new();
        oracle.expect_is_available().return_const(true);
        oracle
            .expect_complete()
            .withf(|request| {
                request.system == MODULE_PROMPTS_SYSTEM_PROMPT
                    && request.user.starts_with("Base topic: jazz history\n")
                    && request.user.contains(NO_CLARIFICATIONS_LINE)
                    && request.temperature == MODULE_PROMPT_TEMPERATURE
                    && request.max_tokens == MODULE_PROMPT_MAX_TOKENS
            })
            .times(1)
            .returning(|_| Ok(well_formed_prompts_response("jazz history", 7)));

        let service = PromptService::new(Arc::new(oracle));
        let prompts = service.generate_prompts("jazz history", &[]).await.unwrap();

        assert_eq!(prompts.discover_sources.len(), 7);
        assert_eq!(prompts.create_podcast.len(), 7);
        assert_eq!(prompts.modules().count(), 7);
    }

    #[actix_web::test]
    async fn clarifications_reach_the_oracle() {
        let mut oracle = MockCompletionOracle::new();
        oracle.expect_is_available().return_const(true);
        oracle
            .expect_complete()
            .withf(|request| request.user.contains("Clarifications:\n– Which era?: bebop\n"))
            .times(1)
            .returning(|_| Ok(well_formed_prompts_response("jazz history", 7)));

        let service = PromptService::new(Arc::new(oracle));
        let result = service
            .generate_prompts("jazz history", &[clarification("Which era?", "bebop")])
            .await;

        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn five_discover_items_are_not_padded() {
        let reply = format!(
            "DISCOVER_SOURCES:\n{}\n\nCREATE_PODCAST:\n{}",
            numbered_section("Discover sources on jazz history", 5),
            numbered_section("Create a 20-minute audio overview on jazz history", 7),
        );

        let service = PromptService::new(Arc::new(oracle_replying(reply)));
        let prompts = service.generate_prompts("jazz history", &[]).await.unwrap();

        assert_eq!(prompts.discover_sources.len(), 5);
        assert_eq!(prompts.create_podcast.len(), 7);
    }

    #[actix_web::test]
    async fn parse_failures_are_all_or_nothing() {
        let reply = format!(
            "DISCOVER_SOURCES:\n{}",
            numbered_section("Discover sources on jazz history", 7)
        );

        let service = PromptService::new(Arc::new(oracle_replying(reply)));
        assert_eq!(
            service.generate_prompts("jazz history", &[]).await,
            Err(AppError::MissingSectionHeaders)
        );
    }

    #[actix_web::test]
    async fn missing_topic_and_missing_key_are_checked_in_order() {
        let mut oracle = MockCompletionOracle::new();
        oracle.expect_is_available().return_const(false);
        oracle.expect_complete().never();
        let service = PromptService::new(Arc::new(oracle));

        assert_eq!(
            service.generate_prompts("", &[]).await,
            Err(AppError::MissingTopic)
        );
        assert_eq!(
            service.generate_prompts("jazz history", &[]).await,
            Err(AppError::OracleUnavailable)
        );
    }
}
