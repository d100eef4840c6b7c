//! Payload validation command

use anyhow::{Context, Result};
use ideaforge_core::suggestion::validate_and_clean_project_data;

use crate::cli::app::ValidateArgs;

/// Execute the validate command
pub fn execute(args: ValidateArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let payload: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse JSON payload")?;

    let cleaned = validate_and_clean_project_data(&payload);

    println!("{}", serde_json::to_string_pretty(&cleaned.draft)?);

    if !cleaned.warnings.is_empty() {
        eprintln!("\nWarnings:");
        for warning in &cleaned.warnings {
            eprintln!("  - {}", warning);
        }
    }

    Ok(())
}
