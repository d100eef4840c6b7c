//! Regex patterns for scanning assistant chat replies
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns for project-suggestion scanning
pub mod suggestion {
    use super::*;

    /// First markdown bold span, capture group 1 is the span text
    pub static BOLD_SPAN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid regex pattern"));

    /// Weekly task heading, captures the week numeral and the heading text
    pub static WEEK_HEADING: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)week\s*(\d+)[:;,\-\s]+(.+)").expect("Invalid regex pattern")
    });

    /// `Technologies:` line, captures the free text after the label
    pub static TECHNOLOGIES_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)technologies\s*:\s*(.+)").expect("Invalid regex pattern")
    });

    /// `Difficulty:` line, captures the suggested level
    pub static DIFFICULTY_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)difficulty\s*:\s*(.+)").expect("Invalid regex pattern")
    });

    /// Section headers that never qualify as a project description
    pub static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^\s*\**\s*(key features|technologies|time estimate|difficulty|week\s*\d+)")
            .expect("Invalid regex pattern")
    });

    /// Bullet marker prefix for list lines
    pub static BULLET_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*[-•*]\s*").expect("Invalid regex pattern"));

    /// Leading `project name:` / `project title:` label on a title span
    pub static TITLE_LABEL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^project\s*(?:name|title)?\s*[:\-]\s*").expect("Invalid regex pattern")
    });

    /// Leading ordinal (`1.`, `2)`) or bullet markers on a title span
    pub static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*(?:\d+\s*[.)]\s*|[-•*]\s+)+").expect("Invalid regex pattern")
    });
}

/// Framework names mapped to the language they imply
pub mod framework {
    /// Resolve a lower-cased framework name to its underlying language
    pub fn to_language(name: &str) -> Option<&'static str> {
        let mapped = match name {
            "react" | "vue" | "angular" | "express" => "JavaScript",
            "node" | "node.js" | "nodejs" => "JavaScript",
            "next.js" | "nextjs" | "nuxt.js" | "nuxtjs" => "JavaScript",
            "django" | "flask" => "Python",
            "spring" => "Java",
            "laravel" => "PHP",
            "rails" => "Ruby",
            _ => return None,
        };

        Some(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_heading_captures() {
        let caps = suggestion::WEEK_HEADING.captures("Week 3: Build the API").unwrap();
        assert_eq!(&caps[1], "3");
        assert_eq!(&caps[2], "Build the API");

        let caps = suggestion::WEEK_HEADING.captures("week 12 - polish and deploy").unwrap();
        assert_eq!(&caps[1], "12");
        assert_eq!(&caps[2], "polish and deploy");

        assert!(!suggestion::WEEK_HEADING.is_match("This took weeks to finish"));
    }

    #[test]
    fn test_bold_span_capture() {
        let caps = suggestion::BOLD_SPAN.captures("Try **Budget Tracker** today").unwrap();
        assert_eq!(&caps[1], "Budget Tracker");

        assert!(!suggestion::BOLD_SPAN.is_match("no emphasis here"));
    }

    #[test]
    fn test_labeled_lines() {
        let caps = suggestion::TECHNOLOGIES_LINE.captures("Technologies: React, Python").unwrap();
        assert_eq!(&caps[1], "React, Python");

        let caps = suggestion::DIFFICULTY_LINE.captures("difficulty: Advanced").unwrap();
        assert_eq!(&caps[1], "Advanced");
    }

    #[test]
    fn test_section_header_detection() {
        assert!(suggestion::SECTION_HEADER.is_match("Key Features:"));
        assert!(suggestion::SECTION_HEADER.is_match("**Time Estimate:** 4 weeks"));
        assert!(suggestion::SECTION_HEADER.is_match("Week 2: Build"));
        assert!(!suggestion::SECTION_HEADER.is_match("A simple expense tracking app."));
    }

    #[test]
    fn test_framework_to_language() {
        assert_eq!(framework::to_language("react"), Some("JavaScript"));
        assert_eq!(framework::to_language("node.js"), Some("JavaScript"));
        assert_eq!(framework::to_language("django"), Some("Python"));
        assert_eq!(framework::to_language("rails"), Some("Ruby"));
        assert_eq!(framework::to_language("cobol"), None);
    }
}
