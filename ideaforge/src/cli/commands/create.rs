//! Project creation command

use anyhow::Result;
use std::path::Path;
use tracing::info;

use ideaforge_core::api::ApiClient;
use ideaforge_core::config::ForgeConfig;
use ideaforge_core::events::{AppEvent, EventBus};
use ideaforge_core::suggestion::{SuggestionPipeline, looks_like_project_suggestion};

use super::read_input;
use crate::cli::app::CreateArgs;

/// Execute the create command
pub async fn execute(args: CreateArgs, config_path: Option<&Path>) -> Result<()> {
    let text = read_input(&args.path)?;

    if !looks_like_project_suggestion(&text) {
        println!("No project suggestion found in the reply");
        std::process::exit(1);
    }

    let cleaned = SuggestionPipeline::new().draft(&text);
    for warning in &cleaned.warnings {
        eprintln!("warning: {}", warning);
    }

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&cleaned.draft)?);
        return Ok(());
    }

    let config = ForgeConfig::load(config_path)?;
    let client = ApiClient::new(&config.api);
    let bus = EventBus::new();

    bus.publish(AppEvent::CreateProject { draft: cleaned.draft.clone() }).await;

    match client.create_project(&cleaned.draft).await {
        Ok(project) => {
            info!(title = %cleaned.draft.title, "project created");
            bus.publish(AppEvent::ProjectCreated { project: project.clone() }).await;
            println!("Project created: {}", cleaned.draft.title);
            println!("{}", serde_json::to_string_pretty(&project)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("Project creation failed: {}", err);
            std::process::exit(1);
        }
    }
}
