use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::oracle::{CompletionOracle, CompletionRequest},
};

/// `CompletionOracle` backed by the OpenAI chat completions API.
pub struct OpenAiOracle {
    client: Option<Client<OpenAIConfig>>,
    model: String,
    timeout: Duration,
}

impl OpenAiOracle {
    pub fn new(config: &Config) -> Self {
        let client = config.openai_api_key.as_ref().map(|key| {
            let mut openai_config = OpenAIConfig::new().with_api_key(key.expose_secret());
            if let Some(base_url) = &config.openai_base_url {
                openai_config = openai_config.with_api_base(base_url);
            }
            Client::with_config(openai_config)
        });

        Self {
            client,
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.oracle_timeout_secs),
        }
    }

    fn messages(request: &CompletionRequest) -> Vec<ChatCompletionRequestMessage> {
        vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                request.system.as_str(),
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                request.user.as_str(),
            )),
        ]
    }
}

#[async_trait]
impl CompletionOracle for OpenAiOracle {
    fn is_available(&self) -> bool {
        self.client.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        let client = self.client.as_ref().ok_or(AppError::OracleUnavailable)?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(Self::messages(&request))
            .temperature(request.temperature)
            .max_completion_tokens(request.max_tokens)
            .build()
            .map_err(|e| AppError::OracleCallFailed(format!("request build failed: {}", e)))?;

        log::debug!(
            "OpenAI chat create: model={}, temperature={}, max_tokens={}",
            self.model,
            request.temperature,
            request.max_tokens
        );

        let response = tokio::time::timeout(self.timeout, client.chat().create(chat_request))
            .await
            .map_err(|_| {
                log::error!("OpenAI call timed out after {}s", self.timeout.as_secs());
                AppError::OracleCallFailed(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                log::error!("OpenAI call failed: {}", e);
                AppError::OracleCallFailed(e.to_string())
            })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::MalformedOracleOutput("completion contained no message content".to_string())
            })
    }
}
