#[cfg(test)]
pub mod fixtures {
    /// A well-formed oracle reply to the clarifying question request
    pub fn valid_questions_json() -> String {
        r#"[
  {
    "question": "Which area of machine learning interests you most?",
    "placeholder": "e.g., computer vision, NLP, reinforcement learning"
  },
  {
    "question": "What is your current level of experience?",
    "placeholder": "e.g., complete beginner, some Python, working engineer"
  },
  {
    "question": "Are you more interested in theory or practice?",
    "placeholder": "e.g., the math behind models, building projects"
  }
]"#
        .to_string()
    }

    /// Numbered items `1.`..`count.` each opening with `lead`
    pub fn numbered_section(lead: &str, count: usize) -> String {
        (1..=count)
            .map(|i| {
                format!(
                    "{i}. {lead}, aspect {i}: look at key figures, recordings and the context around them."
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Module prompt reply laid out the way the instruction asks
    pub fn well_formed_prompts_response(topic: &str, count: usize) -> String {
        format!(
            "DISCOVER_SOURCES:\n{}\n\nCREATE_PODCAST:\n{}",
            numbered_section(&format!("Discover sources on {topic}"), count),
            numbered_section(&format!("Create a 20-minute audio overview on {topic}"), count),
        )
    }

    /// Module prompt reply with the podcast section first
    pub fn reversed_sections_response(topic: &str) -> String {
        format!(
            "CREATE_PODCAST:\n{}\n\nDISCOVER_SOURCES:\n{}",
            numbered_section(&format!("Create a 20-minute audio overview on {topic}"), 7),
            numbered_section(&format!("Discover sources on {topic}"), 7),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_questions_json_has_three_entries() {
        let value: serde_json::Value = serde_json::from_str(&valid_questions_json()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_fixtures_numbered_section() {
        let section = numbered_section("Discover sources on tides", 3);
        assert!(section.starts_with("1. Discover sources on tides, aspect 1:"));
        assert!(section.contains("\n\n3. Discover sources on tides, aspect 3:"));
    }

    #[test]
    fn test_fixtures_sections_are_ordered() {
        let normal = well_formed_prompts_response("tides", 2);
        let reversed = reversed_sections_response("tides");

        assert!(normal.find("DISCOVER_SOURCES").unwrap() < normal.find("CREATE_PODCAST").unwrap());
        assert!(reversed.find("CREATE_PODCAST").unwrap() < reversed.find("DISCOVER_SOURCES").unwrap());
    }
}
