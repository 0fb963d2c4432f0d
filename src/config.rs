use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub oracle_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_blank_var("OPENAI_API_KEY").map(SecretString::from),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_base_url: non_blank_var("OPENAI_BASE_URL"),
            oracle_timeout_secs: env::var("ORACLE_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Whether an OpenAI credential was supplied at startup
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Validate that production-critical configuration is set
    /// Panics if the oracle cannot be reached with this configuration
    pub fn validate_for_production(&self) {
        if !self.has_openai_key() {
            panic!(
                "FATAL: OPENAI_API_KEY is not set! Every generation request would fail without it."
            );
        }

        if self.oracle_timeout_secs == 0 {
            panic!(
                "FATAL: ORACLE_TIMEOUT_SECS is 0. Set it to the number of seconds to wait for a completion."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: Some(SecretString::from("sk-test-key".to_string())),
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_base_url: None,
            oracle_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
