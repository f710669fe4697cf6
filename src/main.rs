// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Load the configuration (file or built-in) and apply --timeout
// 4. Run the crawler until it times out or we get SIGINT / SIGTERM
// 5. Exit with 0, or 1 if the configuration could not be loaded
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config/ - configuration loading and validation
mod crawl;    // src/crawl/ - fetcher, throttle and the walk itself
mod links;    // src/links/ - link normalization, filtering, extraction
mod logging;  // src/logging.rs - tracing subscriber setup

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use crawl::{Crawler, HttpFetcher};
use logging::LogLevel;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(LogLevel::parse_or_default(&cli.log));

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    if cli.config.is_none() {
        info!("No config file specified, using default configuration");
    }
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    config.override_timeout(cli.timeout);

    let fetcher =
        HttpFetcher::new(config.user_agents.clone()).context("Failed to build HTTP client")?;
    let mut crawler = Crawler::new(config, fetcher);

    info!("Starting noise-walker - HTTP traffic noise generator");

    // Dropping the crawl future on a signal abandons any request in flight
    tokio::select! {
        _ = crawler.crawl() => {}
        _ = shutdown_signal() => {
            info!("Received shutdown signal, exiting gracefully...");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {}
        _ = wait_for_sigterm() => {}
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to register SIGTERM handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
