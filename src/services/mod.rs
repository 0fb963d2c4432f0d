pub mod openai_oracle;
pub mod oracle;
pub mod prompt_parser;
pub mod prompt_service;
pub mod question_service;

pub use openai_oracle::OpenAiOracle;
pub use oracle::{CompletionOracle, CompletionRequest};
pub use prompt_service::PromptService;
pub use question_service::QuestionService;
