use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Initialize tracing with appropriate verbosity
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        2.. => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Detect(args) => {
            cli::commands::detect::execute(args)?;
        }
        Commands::Extract(args) => {
            cli::commands::extract::execute(args)?;
        }
        Commands::Validate(args) => {
            cli::commands::validate::execute(args)?;
        }
        Commands::Create(args) => {
            info!("Creating project from chat reply");
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::create::execute(args, cli.config.as_deref()))?;
        }
    }

    Ok(())
}
