use anyhow::Result;
use clap::{Parser, Subcommand};
use cryptogauge::cli::setup::{setup, setup_at_path};
use cryptogauge::core::{Status, log::init_logging};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cryptogauge::AppCommand {
    fn from(cmd: Commands) -> cryptogauge::AppCommand {
        match cmd {
            Commands::Update => cryptogauge::AppCommand::Update,
            Commands::Print => cryptogauge::AppCommand::Print,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch prices and write the capsule page (default)
    Update,
    /// Fetch prices and print the capsule page to stdout
    Print,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Update) {
        Commands::Setup => match cli.config_path.as_deref() {
            Some(path) => setup_at_path(path),
            None => setup(),
        }
        .map(|_| Status::Success),
        cmd => cryptogauge::run_command(cmd.into(), cli.config_path.as_deref()).await,
    };

    match result {
        Ok(status) => Ok(ExitCode::from(status.code())),
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            Err(e)
        }
    }
}
