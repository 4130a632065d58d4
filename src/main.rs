use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "vacmap")]
#[command(about = "Interactive vacuum map panel - select rooms on the floor map, run cleanups")]
#[command(version)]
struct Cli {
    /// Working directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to vacmap.yaml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the map panel
    Gui {
        /// Entity state snapshot for entity-referenced rooms
        #[arg(long)]
        states: Option<PathBuf>,
    },

    /// Resolve entity-referenced rooms and list them
    Rooms {
        /// Entity state snapshot to resolve against
        #[arg(long)]
        states: PathBuf,
    },

    /// Initialize a vacmap.yaml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Gui { states }) => {
            vacmap::gui::run_gui(&work_dir, cli.config, states)?;
        }
        Some(Commands::Rooms { states }) => {
            cli::rooms::rooms_command(&work_dir, cli.config, states).await?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, force).await?;
        }
        None => {
            // Default: run the map panel
            vacmap::gui::run_gui(&work_dir, cli.config, None)?;
        }
    }

    Ok(())
}
