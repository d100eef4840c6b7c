//! Heuristic detection of project suggestions in assistant replies
//!
//! The gate decides whether a reply is worth offering as an extractable
//! suggestion in the chat surface. It is evaluated once per reply and is
//! independent of whether extraction later finds every field. Thresholds
//! here are provisional constants tuned against observed assistant output,
//! not load-bearing business rules.

use chat_patterns::suggestion::{
    BOLD_SPAN, BULLET_PREFIX, DIFFICULTY_LINE, TECHNOLOGIES_LINE, WEEK_HEADING,
};
use tracing::debug;

/// Minimum reply length for the length-gated rules
pub const MIN_SUGGESTION_LEN: usize = 300;

/// Minimum section-keyword hits for the keyword-gated rules
pub const MIN_KEYWORD_HITS: usize = 2;

/// Minimum bullet lines for the structure-gated rule
pub const MIN_BULLET_LINES: usize = 3;

/// Section keywords that mark a structured suggestion
const SECTION_KEYWORDS: [&str; 8] = [
    "key features:",
    "technologies:",
    "difficulty:",
    "time estimate:",
    "weekly task breakdown:",
    "project setup",
    "implementation",
    "testing",
];

/// Conversational phrases that introduce a suggestion
const INTRO_PHRASES: [&str; 6] = [
    "here's a project",
    "here is a project",
    "project suggestion",
    "how about building",
    "you could build",
    "i suggest",
];

/// Decide whether a reply contains an extractable project suggestion
pub fn looks_like_project_suggestion(text: &str) -> bool {
    if WEEK_HEADING.is_match(text) {
        debug!("suggestion gate: weekly heading present");
        return true;
    }

    if !BOLD_SPAN.is_match(text) {
        return false;
    }

    let lowered = text.to_lowercase();
    let keyword_hits =
        SECTION_KEYWORDS.iter().filter(|keyword| lowered.contains(*keyword)).count();
    let long_enough = text.len() > MIN_SUGGESTION_LEN;

    if keyword_hits >= MIN_KEYWORD_HITS && long_enough {
        debug!(keyword_hits, "suggestion gate: keyword rule");
        return true;
    }

    if TECHNOLOGIES_LINE.is_match(text)
        && DIFFICULTY_LINE.is_match(text)
        && count_bullet_lines(text) >= MIN_BULLET_LINES
    {
        debug!("suggestion gate: structure rule");
        return true;
    }

    if lowered.contains("project idea") && long_enough {
        debug!("suggestion gate: project-idea phrase");
        return true;
    }

    if INTRO_PHRASES.iter().any(|phrase| lowered.contains(phrase))
        && keyword_hits >= MIN_KEYWORD_HITS
    {
        debug!("suggestion gate: introduction phrase");
        return true;
    }

    false
}

fn count_bullet_lines(text: &str) -> usize {
    text.lines().filter(|line| BULLET_PREFIX.is_match(line) && !line.trim().is_empty()).count()
}
