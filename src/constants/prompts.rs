pub const QUESTION_TEMPERATURE: f32 = 0.7;
pub const QUESTION_MAX_TOKENS: u32 = 500;

pub const MODULE_PROMPT_TEMPERATURE: f32 = 0.7;
pub const MODULE_PROMPT_MAX_TOKENS: u32 = 2500;

pub const NO_CLARIFICATIONS_LINE: &str = "– No additional clarifications provided.";

pub const CLARIFYING_QUESTIONS_SYSTEM_PROMPT: &str = "You are an expert learning assistant. Your job is to help users create focused, effective learning experiences by asking the right clarifying questions.

Given a learning topic, generate exactly 3 clarifying questions that will help narrow the scope and make the learning more targeted and useful.

Format your response as a JSON array of objects, where each object has:
- \"question\": The clarifying question (should be specific and helpful)
- \"placeholder\": A helpful placeholder text showing example answers

Example format:
[
  {
    \"question\": \"What specific time period or era interests you most?\",
    \"placeholder\": \"e.g., 1960s-1970s, modern day, historical overview\"
  }
]

Make the questions relevant to the specific topic provided. Consider aspects like:
- Time periods, eras, or historical context
- Specific focus areas or subtopics
- Skill level or depth (beginner, intermediate, advanced)
- Practical vs theoretical approach
- Geographic or cultural context
- Industry or application context

Respond only with the JSON array, no additional text.";

pub const MODULE_PROMPTS_SYSTEM_PROMPT: &str = "You are an expert curriculum designer and learning strategist. Your job is to break down complex topics into meaningful learning modules that build comprehensive understanding.

Given a learning topic and clarifications, create 7 detailed learning modules. Each module should focus on a distinct, important aspect of the topic.

For each module, provide two detailed prompts:
1. A \"Discover Sources\" prompt for research (3-6 sentences)
2. A \"Create Podcast\" prompt for audio overview (3-6 sentences)

The prompts should be substantive, specific, and educational. Avoid generic or surface-level approaches.

CRITICAL: You must format your response exactly as requested with clear section headers and numbered items.";

/// Appended after the topic and clarification lines of the module request.
pub const MODULE_PROMPTS_INSTRUCTIONS: &str = "Create 7 focused learning modules based on this topic and clarifications. For each module:

1. Generate a detailed \"discover sources\" prompt (3-6 sentences). Each should:
   • Start with \"Discover sources on...\"
   • Clearly explain what specific aspect to research
   • Mention what types of sources would be valuable
   • Suggest what key insights or information to look for
   • Be substantial enough to guide meaningful research

2. Generate a corresponding detailed \"create podcast\" prompt (3-6 sentences). Each should:
   • Start with \"Create a 20-minute audio overview on...\"
   • Specify what the podcast should cover and explain
   • Mention the target audience or perspective
   • Suggest what key concepts or stories to highlight
   • Provide clear direction for an engaging audio experience

Make each module focus on a distinct, important aspect of the topic. Think deeply about what someone really needs to understand to master this subject.

IMPORTANT: Format your response exactly like this:

DISCOVER_SOURCES:
1. [First discover sources prompt - 3-6 sentences]

2. [Second discover sources prompt - 3-6 sentences]

3. [Third discover sources prompt - 3-6 sentences]

4. [Fourth discover sources prompt - 3-6 sentences]

5. [Fifth discover sources prompt - 3-6 sentences]

6. [Sixth discover sources prompt - 3-6 sentences]

7. [Seventh discover sources prompt - 3-6 sentences]

CREATE_PODCAST:
1. [First create podcast prompt - 3-6 sentences]

2. [Second create podcast prompt - 3-6 sentences]

3. [Third create podcast prompt - 3-6 sentences]

4. [Fourth create podcast prompt - 3-6 sentences]

5. [Fifth create podcast prompt - 3-6 sentences]

6. [Sixth create podcast prompt - 3-6 sentences]

7. [Seventh create podcast prompt - 3-6 sentences]";

pub fn clarifying_questions_user_prompt(topic: &str) -> String {
    format!(
        "Learning topic: \"{topic}\"

Generate 3 clarifying questions to help focus this learning topic."
    )
}

pub fn module_prompts_user_prompt(topic: &str, clarification_lines: &str) -> String {
    format!(
        "Base topic: {topic}
Clarifications:
{clarification_lines}

{MODULE_PROMPTS_INSTRUCTIONS}"
    )
}
