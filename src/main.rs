//! multipr CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use multipr::cli::commands::{run_create, CreateOptions, RunOutcome};
use multipr::cli::output::Output;

#[derive(Parser)]
#[command(name = "multipr")]
#[command(about = "Open the same pull request across many repositories")]
#[command(version)]
struct Cli {
    /// Env file to load (default: .env in the current directory, if present)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// GitHub API root, e.g. for GitHub Enterprise (overrides GITHUB_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "multipr", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let options = CreateOptions {
        env_file: cli.env_file,
        api_url: cli.api_url,
    };

    match run_create(&options).await {
        Ok(RunOutcome::Completed(_)) | Ok(RunOutcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            Output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
