use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ideaforge",
    version,
    about = "IdeaForge - Turn AI chat replies into structured projects",
    long_about = "IdeaForge scans free-form AI assistant replies for project suggestions, extracts a structured record with a weekly task breakdown, normalizes every field, and can submit the result to the platform backend."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the suggestion gate over a reply
    #[command(about = "Check whether a chat reply contains a project suggestion")]
    Detect(DetectArgs),

    /// Extract a structured suggestion from a reply
    #[command(about = "Extract title, description, technologies, difficulty, and weekly tasks")]
    Extract(ExtractArgs),

    /// Normalize a structured project payload
    #[command(about = "Validate and clean an already-structured project payload")]
    Validate(ValidateArgs),

    /// Create a project on the backend from a reply
    #[command(about = "Extract, normalize, and submit a project to the platform backend")]
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Path to a file with the reply text, or '-' for stdin
    #[arg(help = "Reply text file, '-' reads stdin", default_value = "-")]
    pub path: String,
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path to a file with the reply text, or '-' for stdin
    #[arg(help = "Reply text file, '-' reads stdin", default_value = "-")]
    pub path: String,

    /// Emit the suggestion as JSON instead of a summary
    #[arg(long, help = "Print the extracted suggestion as JSON")]
    pub json: bool,

    /// Skip the detection gate and extract unconditionally
    #[arg(long, help = "Extract even when the reply fails the suggestion gate")]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to a JSON file with the project payload
    #[arg(help = "Path to a JSON project payload")]
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Path to a file with the reply text, or '-' for stdin
    #[arg(help = "Reply text file, '-' reads stdin", default_value = "-")]
    pub path: String,

    /// Print the normalized draft without calling the backend
    #[arg(long, help = "Show the draft that would be submitted and stop")]
    pub dry_run: bool,
}
