pub mod capsule;
pub mod cli;
pub mod core;
pub mod providers;

use crate::core::{AppConfig, Status, SystemClock};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Build the capsule page and write it to `output-location`
    Update,
    /// Build the capsule page and print it to stdout
    Print,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<Status> {
    info!("Crypto gauge starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::MarketApiProvider::new(&config);
    let clock = SystemClock;

    match command {
        AppCommand::Update => cli::update::run(&config, &provider, &clock).await,
        AppCommand::Print => {
            let mut stdout = std::io::stdout().lock();
            cli::print::run(&config, &provider, &clock, &mut stdout).await
        }
    }
}
