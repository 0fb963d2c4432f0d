use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Clarification;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GeneratePromptsRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub topic: Option<String>,

    #[serde(default)]
    pub clarifications: Option<Vec<Clarification>>,
}

impl GeneratePromptsRequest {
    pub fn into_parts(self) -> (String, Vec<Clarification>) {
        (
            self.topic.unwrap_or_default(),
            self.clarifications.unwrap_or_default(),
        )
    }
}
