//! Parser for the free-text module prompt layout.
//!
//! The oracle is asked for
//!
//! ```text
//! DISCOVER_SOURCES:
//! 1. ...
//! 7. ...
//! CREATE_PODCAST:
//! 1. ...
//! 7. ...
//! ```
//!
//! and is trusted to follow it only loosely. The grammar accepted here is
//! `discover-header items podcast-header items`, where a header is the first
//! case-insensitive match of its pattern (underscores or whitespace between the
//! words, optional trailing colon) and items are the text between `N. ` markers.
//! Fragments of ten characters or fewer are treated as split noise.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ModulePrompts, MAX_PROMPTS_PER_SECTION},
};

/// Items must be longer than this many characters after trimming.
pub const MIN_PROMPT_CHARS: usize = 10;

static DISCOVER_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)discover[_\s]*sources?:?").expect("DISCOVER_HEADER is a valid regex pattern")
});

static PODCAST_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)create[_\s]*podcast:?").expect("PODCAST_HEADER is a valid regex pattern")
});

static ITEM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.\s").expect("ITEM_MARKER is a valid regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    DiscoverSources,
    CreatePodcast,
}

impl Section {
    fn header_pattern(&self) -> &'static Regex {
        match self {
            Section::DiscoverSources => &DISCOVER_HEADER,
            Section::CreatePodcast => &PODCAST_HEADER,
        }
    }
}

/// Location of a section header within the oracle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderToken {
    pub section: Section,
    pub start: usize,
    pub end: usize,
}

/// Finds the first header for `section`, if any.
pub fn find_header(text: &str, section: Section) -> Option<HeaderToken> {
    section.header_pattern().find(text).map(|m| HeaderToken {
        section,
        start: m.start(),
        end: m.end(),
    })
}

/// Splits a section body on numbered-list markers and keeps the first
/// `MAX_PROMPTS_PER_SECTION` fragments longer than `MIN_PROMPT_CHARS`.
pub fn split_numbered_items(body: &str) -> Vec<String> {
    ITEM_MARKER
        .split(body.trim())
        .map(str::trim)
        .filter(|item| item.chars().count() > MIN_PROMPT_CHARS)
        .take(MAX_PROMPTS_PER_SECTION)
        .map(str::to_string)
        .collect()
}

pub fn parse_module_prompts(text: &str) -> AppResult<ModulePrompts> {
    let (discover, podcast) = match (
        find_header(text, Section::DiscoverSources),
        find_header(text, Section::CreatePodcast),
    ) {
        (Some(discover), Some(podcast)) => (discover, podcast),
        _ => return Err(AppError::MissingSectionHeaders),
    };

    if podcast.start < discover.end {
        return Err(AppError::SectionsOutOfOrder);
    }

    let discover_sources = split_numbered_items(&text[discover.end..podcast.start]);
    let create_podcast = split_numbered_items(&text[podcast.end..]);

    if discover_sources.is_empty() || create_podcast.is_empty() {
        return Err(AppError::EmptyPromptList);
    }

    Ok(ModulePrompts {
        discover_sources,
        create_podcast,
    })
}
