//! Field validators and normalizers for AI-suggested project data
//!
//! Every function here is total: malformed input is absorbed into a
//! default, never an error. The aggregate validator reports what it
//! defaulted through a warnings list so callers can log or display it
//! without threading errors through the UI layer.

use chat_patterns::framework;
use serde_json::Value;

use crate::suggestion::model::*;

/// Upper bound on languages kept after normalization
pub const MAX_LANGUAGES: usize = 5;

/// Upper bound on topics kept after normalization
pub const MAX_TOPICS: usize = 3;

/// Title length cap applied before submission
pub const MAX_TITLE_LEN: usize = 100;

/// Short-description length cap applied before submission
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Inclusive team size bounds accepted by the backend
pub const MEMBER_BOUNDS: (i64, i64) = (1, 10);

/// Words that disqualify a token from being a technology name
const INVALID_TECH_WORDS: [&str; 10] = [
    "scoring",
    "score",
    "restart",
    "option",
    "timer",
    "feature",
    "system",
    "tracking",
    "leaderboard",
    "feedback",
];

/// Languages recognized with canonical casing
const ALLOWED_LANGUAGES: [&str; 19] = [
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Dart",
    "Scala",
    "R",
    "HTML",
    "CSS",
    "SQL",
];

/// Normalize a suggested difficulty into the fixed vocabulary
pub fn validate_difficulty_level(raw: &str) -> DifficultyLevel {
    let lowered = raw.trim().to_lowercase();
    let mapped = match lowered.as_str() {
        "beginner" => "easy",
        "intermediate" => "medium",
        "advanced" => "hard",
        "professional" => "expert",
        other => other,
    };

    match mapped {
        "easy" => DifficultyLevel::Easy,
        "medium" => DifficultyLevel::Medium,
        "hard" => DifficultyLevel::Hard,
        "expert" => DifficultyLevel::Expert,
        _ => DifficultyLevel::Medium,
    }
}

/// Normalize a suggested experience level into the fixed vocabulary
pub fn validate_experience_level(raw: &str) -> ExperienceLevel {
    let lowered = raw.trim().to_lowercase();
    let mapped = match lowered.as_str() {
        "easy" => "beginner",
        "medium" => "intermediate",
        "hard" => "advanced",
        other => other,
    };

    match mapped {
        "beginner" => ExperienceLevel::Beginner,
        "intermediate" => ExperienceLevel::Intermediate,
        "advanced" => ExperienceLevel::Advanced,
        "expert" => ExperienceLevel::Expert,
        _ => ExperienceLevel::Intermediate,
    }
}

/// Clean one suggested technology token
///
/// Returns `None` for tokens that are empty after cleaning or contain a
/// blocklisted word; framework names resolve to their underlying language.
pub fn clean_technology_name(raw: &str) -> Option<String> {
    let stripped = raw.replace("**", "");
    let stripped: String = stripped
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '(' | ')' | '{' | '}' | '<' | '>'))
        .collect();
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        return None;
    }

    let lowered = cleaned.to_lowercase();
    if let Some(language) = framework::to_language(&lowered) {
        return Some(language.to_string());
    }

    if INVALID_TECH_WORDS.iter().any(|word| lowered.contains(word)) {
        return None;
    }

    Some(cleaned)
}

/// Normalize a suggested language list into 1..=5 canonical names
pub fn validate_programming_languages(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return vec![FALLBACK_LANGUAGE.to_string()];
    };

    let cleaned: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(clean_technology_name)
        .take(MAX_LANGUAGES)
        .collect();

    let mut languages: Vec<String> = Vec::new();
    for name in cleaned {
        let cased = title_case(&name);
        let resolved = framework::to_language(&cased.to_lowercase())
            .map(str::to_string)
            .or_else(|| {
                ALLOWED_LANGUAGES
                    .iter()
                    .find(|known| known.eq_ignore_ascii_case(&cased))
                    .map(|known| known.to_string())
            })
            .unwrap_or(cased);

        if !languages.contains(&resolved) {
            languages.push(resolved);
        }
    }

    if languages.is_empty() {
        return vec![FALLBACK_LANGUAGE.to_string()];
    }

    languages
}

/// Normalize a suggested topic list into 1..=3 entries
pub fn validate_topics(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = raw else {
        return vec![FALLBACK_TOPIC.to_string()];
    };

    let topics: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .take(MAX_TOPICS)
        .collect();

    if topics.is_empty() {
        return vec![FALLBACK_TOPIC.to_string()];
    }

    topics
}

/// Normalize an untrusted project payload into a creation-ready draft
///
/// Tasks are passed through only when the input field is an array; this
/// function never regenerates them from text.
pub fn validate_and_clean_project_data(input: &Value) -> CleanedProject {
    let mut warnings = Vec::new();

    let title_raw = input.get("title").and_then(Value::as_str).unwrap_or_default().trim();
    let title = if title_raw.is_empty() {
        warnings.push(ValidationWarning::new("title", "blank, using fallback title"));
        FALLBACK_TITLE.to_string()
    } else {
        truncate_chars(title_raw, MAX_TITLE_LEN)
    };

    let description_raw =
        input.get("description").and_then(Value::as_str).unwrap_or_default().trim();
    let description = if description_raw.is_empty() {
        warnings.push(ValidationWarning::new("description", "blank, using fallback description"));
        FALLBACK_DESCRIPTION.to_string()
    } else {
        truncate_chars(description_raw, MAX_DESCRIPTION_LEN)
    };

    let detailed_raw =
        input.get("detailedDescription").and_then(Value::as_str).unwrap_or_default().trim();
    let detailed_description =
        if detailed_raw.is_empty() { description.clone() } else { detailed_raw.to_string() };

    let difficulty_raw = input.get("difficultyLevel").and_then(Value::as_str).unwrap_or_default();
    let difficulty_level = validate_difficulty_level(difficulty_raw);

    let required_experience_level = match input.get("requiredExperienceLevel").and_then(Value::as_str)
    {
        Some(raw) => validate_experience_level(raw),
        None => difficulty_level.required_experience(),
    };

    let languages_raw = input.get("programmingLanguages");
    if !matches!(languages_raw, Some(Value::Array(_))) {
        warnings.push(ValidationWarning::new(
            "programmingLanguages",
            "missing or not a list, using default language",
        ));
    }
    let programming_languages = validate_programming_languages(languages_raw);

    let topics = validate_topics(input.get("topics"));

    let maximum_members = match parse_member_count(input.get("maximumMembers")) {
        Some(count) => {
            let clamped = count.clamp(MEMBER_BOUNDS.0, MEMBER_BOUNDS.1);
            if clamped != count {
                warnings.push(ValidationWarning::new(
                    "maximumMembers",
                    format!("{} out of range, clamped to {}", count, clamped),
                ));
            }
            clamped as u32
        }
        None => 1,
    };

    let estimated_duration = match input.get("estimatedDuration").and_then(Value::as_str) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => "medium".to_string(),
    };

    let tasks = match input.get("tasks") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<TaskSuggestion>(item.clone()).ok())
            .collect(),
        Some(_) => {
            warnings.push(ValidationWarning::new("tasks", "not a list, dropping"));
            Vec::new()
        }
        None => Vec::new(),
    };

    CleanedProject {
        draft: ProjectDraft {
            title,
            description,
            detailed_description,
            difficulty_level,
            required_experience_level,
            programming_languages,
            topics,
            maximum_members,
            estimated_duration,
            status: ProjectStatus::Active,
            is_public: false,
            tasks,
        },
        warnings,
    }
}

fn parse_member_count(raw: Option<&Value>) -> Option<i64> {
    match raw {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
