pub mod request;
pub mod response;

pub use request::{GeneratePromptsRequest, GenerateQuestionsRequest};
pub use response::{GenerateQuestionsResponse, HealthResponse};
