//! Single-shot update check: query the versions table once, compare against
//! the running version, and prompt when a newer release is published.
//!
//! Exit codes: 0 when up to date or the update was postponed, 10 when an
//! update is available, 1 when the check itself failed.

mod cli;
mod logging;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use nudge_core::decide;
use nudge_remote::{RemoteConfig, fetch_latest};

use crate::prompt::PromptOutcome;

const EXIT_UPDATE_AVAILABLE: u8 = 10;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose);

    let config = RemoteConfig {
        base_url: cli.endpoint,
        table: cli.table,
        api_key: cli.api_key,
    };
    let client = reqwest::Client::new();

    // A failed check never prompts: log it and fail closed.
    let info = match fetch_latest(&client, &config).await {
        Ok(Some(info)) => info,
        Ok(None) => {
            info!("No published versions found");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            error!("Update check failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "Latest published version: {} (running {})",
        info.version, cli.current
    );

    let decision = decide(&info, &cli.current);
    if !decision.should_prompt {
        info!("Already up to date ({})", cli.current);
        return ExitCode::SUCCESS;
    }

    if cli.assume_yes {
        return open_store(&info.store_url);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match prompt::prompt_user(&info, decision.dismissible, &mut stdin.lock(), &mut stdout) {
        Ok(PromptOutcome::Accepted) => open_store(&info.store_url),
        Ok(PromptOutcome::Dismissed) => {
            info!("Update to {} postponed", info.version);
            ExitCode::SUCCESS
        }
        Ok(PromptOutcome::NoInput) => ExitCode::from(EXIT_UPDATE_AVAILABLE),
        Err(error) => {
            error!("Failed to read prompt answer: {error}");
            ExitCode::from(EXIT_UPDATE_AVAILABLE)
        }
    }
}

fn open_store(url: &str) -> ExitCode {
    if let Err(error) = open::that(url) {
        error!("Failed to open store page {url}: {error}");
        return ExitCode::FAILURE;
    }
    info!("Opened store page {url}");
    ExitCode::from(EXIT_UPDATE_AVAILABLE)
}
