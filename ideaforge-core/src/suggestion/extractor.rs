//! Project suggestion extraction from raw assistant text
//!
//! Best-effort scraping of a title, description, technology list, and
//! difficulty out of free-form prose. Every field falls back to a default
//! when the text does not cooperate; extraction itself never fails.

use chat_patterns::suggestion::{
    BOLD_SPAN, DIFFICULTY_LINE, ORDINAL_PREFIX, SECTION_HEADER, TECHNOLOGIES_LINE, TITLE_LABEL,
};
use tracing::debug;

use crate::suggestion::model::*;
use crate::suggestion::tasks::parse_tasks;
use crate::suggestion::validate::{clean_technology_name, validate_difficulty_level, MAX_LANGUAGES};

/// Technology tokens at or past this length are discarded as prose
const MAX_TECH_TOKEN_LEN: usize = 30;

/// Characters that separate technology names on a `Technologies:` line
const TECH_SEPARATORS: [char; 7] = [',', '•', '·', '+', '&', '/', '|'];

/// Scrapes structured project suggestions out of free-form replies
#[derive(Debug, Default)]
pub struct SuggestionExtractor;

impl SuggestionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract a full suggestion record from one assistant reply
    pub fn extract(&self, raw: &str) -> ProjectSuggestion {
        let title = self.extract_title(raw);
        let description = self.extract_description(raw);
        let programming_languages = self.extract_technologies(raw);
        let difficulty_level = self.extract_difficulty(raw);
        let tasks = parse_tasks(raw);

        if tasks.is_empty() {
            debug!("no weekly tasks found in reply");
        }

        ProjectSuggestion {
            title,
            description,
            detailed_description: raw.trim().to_string(),
            difficulty_level,
            required_experience_level: difficulty_level.required_experience(),
            programming_languages,
            topics: vec![FALLBACK_TOPIC.to_string()],
            tasks,
        }
    }

    /// First bold span, sanitized; fixed fallback when none qualifies
    fn extract_title(&self, raw: &str) -> String {
        let Some(caps) = BOLD_SPAN.captures(raw) else {
            return FALLBACK_TITLE.to_string();
        };

        let sanitized = sanitize_title(&caps[1]);
        if sanitized.is_empty() {
            return FALLBACK_TITLE.to_string();
        }

        sanitized
    }

    /// First qualifying non-bullet line after the title line
    fn extract_description(&self, raw: &str) -> String {
        let mut past_title = false;

        for line in raw.lines() {
            let trimmed = line.trim();

            if !past_title {
                if BOLD_SPAN.is_match(trimmed) {
                    past_title = true;
                }
                continue;
            }

            if trimmed.is_empty()
                || trimmed.starts_with('-')
                || trimmed.starts_with('•')
                || SECTION_HEADER.is_match(trimmed)
            {
                continue;
            }

            return trimmed.to_string();
        }

        FALLBACK_DESCRIPTION.to_string()
    }

    /// Split and clean the `Technologies:` line; fallback when empty
    fn extract_technologies(&self, raw: &str) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();

        if let Some(caps) = TECHNOLOGIES_LINE.captures(raw) {
            for token in caps[1].split(TECH_SEPARATORS) {
                let Some(cleaned) = clean_technology_name(token) else {
                    continue;
                };
                if cleaned.len() >= MAX_TECH_TOKEN_LEN {
                    continue;
                }
                if !languages.contains(&cleaned) {
                    languages.push(cleaned);
                }
                if languages.len() == MAX_LANGUAGES {
                    break;
                }
            }
        }

        if languages.is_empty() {
            debug!("no technologies recognized, defaulting to {}", FALLBACK_LANGUAGE);
            return vec![FALLBACK_LANGUAGE.to_string()];
        }

        languages
    }

    /// `Difficulty:` line normalized through the difficulty validator
    fn extract_difficulty(&self, raw: &str) -> DifficultyLevel {
        match DIFFICULTY_LINE.captures(raw) {
            Some(caps) => validate_difficulty_level(caps[1].trim().trim_matches('*')),
            None => DifficultyLevel::Medium,
        }
    }
}

/// Strip markdown, list markers, labels, and quotes from a title span
fn sanitize_title(raw: &str) -> String {
    let stripped: String =
        raw.chars().filter(|c| !matches!(c, '*' | '_' | '#' | '`')).collect();
    let stripped = ORDINAL_PREFIX.replace(&stripped, "");
    let stripped = TITLE_LABEL.replace(&stripped, "");

    stripped.trim().trim_matches(|c| matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’')).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET_TRACKER: &str = "**Budget Tracker**\nA simple app.\nTechnologies: React, Python\nDifficulty: Advanced\nWeek 1: Setup\n- Install tools\nWeek 2: Build\n- Add UI\n- Add backend";

    #[test]
    fn test_end_to_end_extraction() {
        let suggestion = SuggestionExtractor::new().extract(BUDGET_TRACKER);

        assert_eq!(suggestion.title, "Budget Tracker");
        assert_eq!(suggestion.description, "A simple app.");
        assert_eq!(suggestion.programming_languages, vec!["JavaScript", "Python"]);
        assert_eq!(suggestion.difficulty_level, DifficultyLevel::Hard);
        assert_eq!(suggestion.required_experience_level, ExperienceLevel::Advanced);
        assert_eq!(suggestion.tasks.len(), 2);
        assert_eq!(suggestion.tasks[0].estimated_hours, 8);
        assert_eq!(suggestion.tasks[1].estimated_hours, 16);
        assert_eq!(suggestion.detailed_description, BUDGET_TRACKER);
    }

    #[test]
    fn test_title_fallback_without_bold_span() {
        let suggestion = SuggestionExtractor::new().extract("Just a short chat reply.");
        assert_eq!(suggestion.title, FALLBACK_TITLE);
        assert_eq!(suggestion.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_title_sanitization() {
        assert_eq!(sanitize_title("**Project Name: Chess Trainer**"), "Chess Trainer");
        assert_eq!(sanitize_title("1. \"Recipe Box\""), "Recipe Box");
        assert_eq!(sanitize_title("- __Weather Station__"), "Weather Station");
        assert_eq!(sanitize_title("***"), "");
    }

    #[test]
    fn test_description_skips_bullets_and_section_headers() {
        let text = "**Recipe Box**\n\n- a bullet first\nKey Features: many\nStores family recipes.\n";
        let suggestion = SuggestionExtractor::new().extract(text);
        assert_eq!(suggestion.description, "Stores family recipes.");
    }

    #[test]
    fn test_description_requires_title_line_first() {
        let text = "This line comes before any title.\n**Recipe Box**\nStores family recipes.";
        let suggestion = SuggestionExtractor::new().extract(text);
        assert_eq!(suggestion.description, "Stores family recipes.");
    }

    #[test]
    fn test_technology_splitting_and_cleaning() {
        let text = "**App**\nTechnologies: React / Vue • Python + Postgres, Leaderboard System";
        let suggestion = SuggestionExtractor::new().extract(text);
        assert_eq!(suggestion.programming_languages, vec!["JavaScript", "Python", "Postgres"]);
    }

    #[test]
    fn test_oversized_tech_tokens_are_dropped() {
        let text = format!("**App**\nTechnologies: {}", "x".repeat(45));
        let suggestion = SuggestionExtractor::new().extract(&text);
        assert_eq!(suggestion.programming_languages, vec![FALLBACK_LANGUAGE.to_string()]);
    }

    #[test]
    fn test_difficulty_defaults_to_medium() {
        let suggestion = SuggestionExtractor::new().extract("**App**\nNo difficulty here.");
        assert_eq!(suggestion.difficulty_level, DifficultyLevel::Medium);
        assert_eq!(suggestion.required_experience_level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_bold_difficulty_value() {
        let suggestion = SuggestionExtractor::new().extract("**App**\nDifficulty: **Expert**");
        assert_eq!(suggestion.difficulty_level, DifficultyLevel::Expert);
    }
}
