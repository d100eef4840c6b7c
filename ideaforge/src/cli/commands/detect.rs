//! Suggestion gate command

use anyhow::Result;
use ideaforge_core::suggestion::looks_like_project_suggestion;

use super::read_input;
use crate::cli::app::DetectArgs;

/// Execute the detect command
pub fn execute(args: DetectArgs) -> Result<()> {
    let text = read_input(&args.path)?;

    if looks_like_project_suggestion(&text) {
        println!("Project suggestion detected");
    } else {
        println!("No project suggestion found");
        std::process::exit(1);
    }

    Ok(())
}
