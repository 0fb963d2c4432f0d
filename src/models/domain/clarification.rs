use serde::{Deserialize, Serialize};

/// A clarifying question paired with the user's answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Clarification {
    pub question: String,
    pub answer: String,
}

impl Clarification {
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }

    /// Renders the pair as one line of the module-generation instruction.
    pub fn as_instruction_line(&self) -> String {
        format!("– {}: {}", self.question, self.answer)
    }
}
