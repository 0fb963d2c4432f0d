use serde::{Deserialize, Serialize};

/// Upper bound on prompts kept per section.
pub const MAX_PROMPTS_PER_SECTION: usize = 7;

/// The two index-aligned prompt sequences produced for a topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePrompts {
    pub discover_sources: Vec<String>,
    pub create_podcast: Vec<String>,
}

impl ModulePrompts {
    /// Pairs of (discover, podcast) prompts at matching positions.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.discover_sources
            .iter()
            .zip(self.create_podcast.iter())
            .map(|(d, p)| (d.as_str(), p.as_str()))
    }
}
