//! Weekly task extraction from assistant replies
//!
//! A single forward scan over lines with two states: seeking a `Week N`
//! heading, then collecting that week's bullet lines until the next
//! heading or end of input flushes the open task.

use chat_patterns::suggestion::{BULLET_PREFIX, WEEK_HEADING};

use crate::suggestion::model::{TaskCategory, TaskPriority, TaskSuggestion};

/// Hours budgeted per week number
const HOURS_PER_WEEK: u32 = 8;

/// Cap on a single task's estimate
const MAX_TASK_HOURS: u32 = 40;

/// Bullet lines starting with this prefix never reach a task description
const OUTCOME_PREFIX: &str = "expected outcome";

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineClass {
    /// A `Week N` heading with its numeral and heading text
    Heading { week: u32, text: String },
    /// A bullet line with its marker stripped
    Bullet(String),
    /// Anything else, ignored by the scan
    Other,
}

/// Classify a single line; pure, no scan state involved
fn classify_line(line: &str) -> LineClass {
    if let Some(caps) = WEEK_HEADING.captures(line) {
        if let Ok(week) = caps[1].parse::<u32>() {
            let text = caps[2].trim().trim_matches('*').trim().to_string();
            return LineClass::Heading { week, text };
        }
    }

    let trimmed = line.trim_start();
    if trimmed.starts_with('-') || trimmed.starts_with('•') || trimmed.starts_with('*') {
        return LineClass::Bullet(BULLET_PREFIX.replace(line, "").trim().to_string());
    }

    LineClass::Other
}

/// A heading that has been seen but not yet flushed
#[derive(Debug)]
struct OpenTask {
    week: u32,
    heading: String,
    body: String,
}

impl OpenTask {
    fn flush(self) -> TaskSuggestion {
        TaskSuggestion {
            title: format!("Week {}: {}", self.week, self.heading),
            description: self.body.trim().to_string(),
            estimated_hours: self.week.saturating_mul(HOURS_PER_WEEK).min(MAX_TASK_HOURS),
            priority: TaskPriority::Medium,
            category: TaskCategory::Learning,
        }
    }
}

/// Parse `Week N:` blocks out of a raw reply, in heading order
///
/// Zero headings yield an empty list; a heading with no bullets yields a
/// task with an empty description. Week numbers are taken from the matched
/// numeral as-is, duplicates and gaps included.
pub fn parse_tasks(raw: &str) -> Vec<TaskSuggestion> {
    let mut tasks = Vec::new();
    let mut open: Option<OpenTask> = None;

    for line in raw.lines() {
        match classify_line(line) {
            LineClass::Heading { week, text } => {
                if let Some(task) = open.take() {
                    tasks.push(task.flush());
                }
                open = Some(OpenTask { week, heading: text, body: String::new() });
            }
            LineClass::Bullet(text) => {
                if let Some(task) = open.as_mut() {
                    if !text.to_lowercase().starts_with(OUTCOME_PREFIX) {
                        task.body.push_str(&text);
                        task.body.push('\n');
                    }
                }
            }
            LineClass::Other => {}
        }
    }

    if let Some(task) = open.take() {
        tasks.push(task.flush());
    }

    tasks
}
