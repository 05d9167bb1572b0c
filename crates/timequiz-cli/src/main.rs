//! timequiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "timequiz",
    version,
    about = "Timed question-and-answer quiz for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a timed quiz session
    Run {
        /// Path to a question,answer CSV file [default: problems.csv]
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Time limit for the whole quiz, in seconds [default: 30]
        #[arg(long)]
        limit: Option<u64>,

        /// Summary format: text, json [default: text]
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question file without running a quiz
    Validate {
        /// Path to a question,answer CSV file [default: problems.csv]
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print every loaded question
        #[arg(long)]
        list: bool,
    },

    /// Create a starter config and question file
    Init,
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            csv,
            limit,
            format,
            config,
        } => commands::run::execute(csv, limit, format, config).await,
        Commands::Validate { csv, config, list } => commands::validate::execute(csv, config, list),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
