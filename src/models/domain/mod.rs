pub mod clarification;
pub mod clarifying_question;
pub mod module_prompts;
pub mod topic;
pub use clarification::Clarification;
pub use clarifying_question::{ClarifyingQuestion, CLARIFYING_QUESTION_COUNT};
pub use module_prompts::{ModulePrompts, MAX_PROMPTS_PER_SECTION};
pub use topic::Topic;
