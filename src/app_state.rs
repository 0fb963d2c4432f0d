use std::sync::Arc;

use crate::{
    config::Config,
    services::{CompletionOracle, OpenAiOracle, PromptService, QuestionService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub prompt_service: Arc<PromptService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let oracle: Arc<dyn CompletionOracle> = Arc::new(OpenAiOracle::new(&config));
        Self::with_oracle(config, oracle)
    }

    /// Builds the state around an already constructed oracle.
    pub fn with_oracle(config: Config, oracle: Arc<dyn CompletionOracle>) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(Arc::clone(&oracle))),
            prompt_service: Arc::new(PromptService::new(oracle)),
            config: Arc::new(config),
        }
    }
}
