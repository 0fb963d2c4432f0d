use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("OpenAI API key not configured")]
    OracleUnavailable,

    #[error("Invalid response format from OpenAI: {0}")]
    MalformedOracleOutput(String),

    #[error("{0}")]
    UnexpectedShape(String),

    #[error("Could not find required section headers in response")]
    MissingSectionHeaders,

    #[error("CREATE_PODCAST section appears before DISCOVER_SOURCES section")]
    SectionsOutOfOrder,

    #[error("No valid prompts found in response")]
    EmptyPromptList,

    #[error("OpenAI request failed: {0}")]
    OracleCallFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingTopic => "MISSING_TOPIC",
            AppError::OracleUnavailable => "ORACLE_UNAVAILABLE",
            AppError::MalformedOracleOutput(_) => "MALFORMED_ORACLE_OUTPUT",
            AppError::UnexpectedShape(_) => "UNEXPECTED_SHAPE",
            AppError::MissingSectionHeaders => "MISSING_SECTION_HEADERS",
            AppError::SectionsOutOfOrder => "SECTIONS_OUT_OF_ORDER",
            AppError::EmptyPromptList => "EMPTY_PROMPT_LIST",
            AppError::OracleCallFailed(_) => "ORACLE_CALL_FAILED",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingTopic | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the user-facing summary of the operation that failed.
    pub fn during(self, operation: Operation) -> ApiError {
        ApiError {
            operation,
            source: self,
        }
    }
}

/// The two generator operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateQuestions,
    GeneratePrompts,
}

impl Operation {
    pub fn failure_summary(&self) -> &'static str {
        match self {
            Operation::GenerateQuestions => {
                "Failed to generate clarification questions. Please try again."
            }
            Operation::GeneratePrompts => "Failed to generate prompts. Please try again.",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An `AppError` raised while serving one operation.
#[derive(Debug, Error)]
#[error("{} ({source})", .operation.failure_summary())]
pub struct ApiError {
    pub operation: Operation,
    #[source]
    pub source: AppError,
}

impl ApiError {
    pub fn body(&self) -> ErrorResponse {
        match &self.source {
            AppError::MissingTopic | AppError::OracleUnavailable | AppError::InvalidRequest(_) => {
                ErrorResponse {
                    error: self.source.to_string(),
                    details: None,
                }
            }
            other => ErrorResponse {
                error: self.operation.failure_summary().to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.source.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(("x-error-code", self.source.error_code()))
            .json(self.body())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        if err.field_errors().contains_key("topic") {
            AppError::MissingTopic
        } else {
            AppError::InvalidRequest(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
