//! Semantic model for project suggestions and their weekly tasks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when no usable bold span is found in the reply
pub const FALLBACK_TITLE: &str = "AI Suggested Project";

/// Description used when no qualifying line follows the title
pub const FALLBACK_DESCRIPTION: &str = "A hands-on project suggested by the AI assistant";

/// Language used when technology extraction comes up empty
pub const FALLBACK_LANGUAGE: &str = "JavaScript";

/// Topic used when no topics survive normalization
pub const FALLBACK_TOPIC: &str = "Programming";

/// A project suggestion scraped from a single assistant reply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSuggestion {
    /// Sanitized title, markdown stripped
    pub title: String,

    /// First qualifying non-bullet line after the title
    pub description: String,

    /// Full original reply text, trimmed
    pub detailed_description: String,

    /// Suggested difficulty, defaults to medium
    pub difficulty_level: DifficultyLevel,

    /// Experience level derived from the difficulty
    pub required_experience_level: ExperienceLevel,

    /// Deduplicated languages, at most five, never empty
    pub programming_languages: Vec<String>,

    /// At most three topics, never empty
    pub topics: Vec<String>,

    /// Weekly tasks in heading order, possibly empty
    pub tasks: Vec<TaskSuggestion>,
}

/// A single weekly task scraped from a `Week N:` block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuggestion {
    /// Formatted as `Week {n}: {heading text}`
    #[serde(default)]
    pub title: String,

    /// Newline-joined bullet lines belonging to the week
    #[serde(default)]
    pub description: String,

    /// `min(week_number * 8, 40)`
    #[serde(default)]
    pub estimated_hours: u32,

    /// Fixed at medium in this layer, not derived
    #[serde(default)]
    pub priority: TaskPriority,

    /// Fixed at learning in this layer, not derived
    #[serde(default)]
    pub category: TaskCategory,
}

/// Difficulty vocabulary accepted by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Fixed difficulty-to-experience mapping
    pub fn required_experience(&self) -> ExperienceLevel {
        match self {
            Self::Easy => ExperienceLevel::Beginner,
            Self::Medium => ExperienceLevel::Intermediate,
            Self::Hard => ExperienceLevel::Advanced,
            Self::Expert => ExperienceLevel::Expert,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Experience vocabulary accepted by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Task category vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    #[default]
    Learning,
    Implementation,
    Testing,
    Documentation,
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

/// Normalized creation payload for `POST /projects`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub difficulty_level: DifficultyLevel,
    pub required_experience_level: ExperienceLevel,
    pub programming_languages: Vec<String>,
    pub topics: Vec<String>,
    pub maximum_members: u32,
    pub estimated_duration: String,
    pub status: ProjectStatus,
    pub is_public: bool,
    pub tasks: Vec<TaskSuggestion>,
}

/// A field the aggregate validator had to default or clamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of running the aggregate validator over untrusted input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedProject {
    pub draft: ProjectDraft,
    pub warnings: Vec<ValidationWarning>,
}
