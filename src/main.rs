mod cmd;
mod composer;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::draft::{self, DraftArgs, OutputArg};
use crate::cmd::snapshot;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::options::Scenario;
use crate::error::AppResult;
use crate::infra::clipboard::SystemClipboard;
use crate::infra::file_store::JsonFileStore;

const LOG_ENV: &str = "SUPPORTDRAFT_LOG";

#[derive(Parser)]
#[command(
    name = "supportdraft",
    author,
    version,
    about = "Draft IT support emails, chat messages and ticket notes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a draft and a matching AI prompt, then save them as the last draft.
    Draft(DraftArgs),
    /// Show the last saved draft.
    Last,
    /// Copy the draft or prompt from the last saved draft to the clipboard.
    Copy {
        #[arg(value_enum)]
        output: OutputArg,
    },
    /// Blank the saved free-text fields and outputs.
    Clear,
    /// List scenario keys and their labels.
    Scenarios,
    /// Manage stored defaults.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Scenarios => {
            for scenario in Scenario::CATALOG {
                println!("{:<18} {}", scenario.as_str(), scenario.label());
            }
            Ok(())
        }
        Commands::Draft(args) => draft::run(&build_context()?, args).await,
        Commands::Last => snapshot::run_last(&build_context()?).await,
        Commands::Copy { output } => snapshot::run_copy(&build_context()?, output.into()).await,
        Commands::Clear => snapshot::run_clear(&build_context()?).await,
    }
}

fn build_context() -> AppResult<AppContext> {
    let config = AppConfig::load()?;
    let store = Arc::new(JsonFileStore::in_dir(&config.data_dir));
    let clipboard = Arc::new(SystemClipboard::new(config.clipboard_hold));
    Ok(AppContext::new(config, store, clipboard))
}
