//! Suggestion extraction command

use anyhow::Result;
use ideaforge_core::suggestion::{ProjectSuggestion, SuggestionPipeline};

use super::read_input;
use crate::cli::app::ExtractArgs;

/// Execute the extract command
pub fn execute(args: ExtractArgs) -> Result<()> {
    let text = read_input(&args.path)?;
    let pipeline = SuggestionPipeline::new();

    let suggestion = if args.force {
        pipeline.extract(&text)
    } else {
        match pipeline.scan(&text) {
            Some(suggestion) => suggestion,
            None => {
                println!("No project suggestion found (use --force to extract anyway)");
                std::process::exit(1);
            }
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        print_summary(&suggestion);
    }

    Ok(())
}

fn print_summary(suggestion: &ProjectSuggestion) {
    println!("Title:       {}", suggestion.title);
    println!("Description: {}", suggestion.description);
    println!("Difficulty:  {}", suggestion.difficulty_level);
    println!("Experience:  {}", suggestion.required_experience_level);
    println!("Languages:   {}", suggestion.programming_languages.join(", "));
    println!("Topics:      {}", suggestion.topics.join(", "));

    if suggestion.tasks.is_empty() {
        println!("\nNo weekly tasks found");
        return;
    }

    println!("\nTasks ({}):", suggestion.tasks.len());
    for task in &suggestion.tasks {
        println!("  - {} ({}h)", task.title, task.estimated_hours);
        for line in task.description.lines() {
            println!("      {}", line);
        }
    }
}
