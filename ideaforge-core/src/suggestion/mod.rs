//! Project suggestion pipeline
//!
//! This module turns raw assistant replies into creation-ready project
//! records: a detection gate decides whether a reply contains a
//! suggestion, the extractor scrapes the structured fields, the task
//! parser segments the weekly breakdown, and the validators normalize
//! every loosely-typed value into the backend vocabulary.

pub mod detect;
pub mod extractor;
pub mod model;
pub mod tasks;
pub mod validate;

pub use detect::looks_like_project_suggestion;
pub use extractor::SuggestionExtractor;
pub use model::*;
pub use tasks::parse_tasks;
pub use validate::validate_and_clean_project_data;

use tracing::debug;

/// Gate plus extraction, the way the chat surface consumes them
#[derive(Debug, Default)]
pub struct SuggestionPipeline {
    extractor: SuggestionExtractor,
}

impl SuggestionPipeline {
    pub fn new() -> Self {
        Self { extractor: SuggestionExtractor::new() }
    }

    /// Extract only when the reply passes the detection gate
    pub fn scan(&self, raw: &str) -> Option<ProjectSuggestion> {
        if !looks_like_project_suggestion(raw) {
            debug!("reply did not pass the suggestion gate");
            return None;
        }

        Some(self.extractor.extract(raw))
    }

    /// Extract unconditionally; every field defaults when absent
    pub fn extract(&self, raw: &str) -> ProjectSuggestion {
        self.extractor.extract(raw)
    }

    /// Extract and normalize into a creation-ready draft
    ///
    /// The suggestion is serialized to the same loosely-typed shape the
    /// backend accepts and run through the aggregate validator, so a draft
    /// built from raw text and one built from an already-structured
    /// payload take the same path.
    pub fn draft(&self, raw: &str) -> CleanedProject {
        let suggestion = self.extract(raw);
        let value = serde_json::to_value(&suggestion)
            .unwrap_or(serde_json::Value::Null);
        validate_and_clean_project_data(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET_TRACKER: &str = "**Budget Tracker**\nA simple app.\nTechnologies: React, Python\nDifficulty: Advanced\nWeek 1: Setup\n- Install tools\nWeek 2: Build\n- Add UI\n- Add backend";

    #[test]
    fn test_gate_accepts_weekly_breakdown_and_rejects_small_talk() {
        let pipeline = SuggestionPipeline::new();
        assert!(pipeline.scan(BUDGET_TRACKER).is_some());
        assert!(pipeline.scan("Sounds good!\nSee you tomorrow.").is_none());
    }

    #[test]
    fn test_scan_yields_extracted_fields() {
        let suggestion = SuggestionPipeline::new().scan(BUDGET_TRACKER).unwrap();

        assert_eq!(suggestion.title, "Budget Tracker");
        assert_eq!(suggestion.description, "A simple app.");
        assert_eq!(suggestion.programming_languages, vec!["JavaScript", "Python"]);
        assert_eq!(suggestion.difficulty_level, DifficultyLevel::Hard);
        assert_eq!(suggestion.tasks.len(), 2);
    }

    #[test]
    fn test_draft_is_creation_ready() {
        let cleaned = SuggestionPipeline::new().draft(BUDGET_TRACKER);

        assert_eq!(cleaned.draft.title, "Budget Tracker");
        assert_eq!(cleaned.draft.status, ProjectStatus::Active);
        assert!(!cleaned.draft.is_public);
        assert_eq!(cleaned.draft.maximum_members, 1);
        assert_eq!(cleaned.draft.tasks.len(), 2);
        assert_eq!(cleaned.draft.tasks[1].estimated_hours, 16);
        assert_eq!(cleaned.draft.programming_languages, vec!["JavaScript", "Python"]);
    }
}
