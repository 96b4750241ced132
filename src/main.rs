// src/main.rs

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use livescore::application::{run_session, AppConfig, AppState};
use livescore::events::{FixtureFinished, FixtureStarted, ScoreUpdated};

/// Live scoreboard for concurrently running fixtures
#[derive(Debug, Parser)]
#[command(name = "livescore", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of accepted team names (overrides the config file)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. CONFIGURATION
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // 2. LOGGING
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level {:?}", config.log_level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // 3. APPLICATION STATE
    let state = AppState::from_config(&config).context("failed to build scoreboard")?;

    // 4. EVENT HANDLER REGISTRATION
    state.event_bus.subscribe::<FixtureStarted, _>(|event| {
        log::debug!("started #{}: {} vs {}", event.start_order, event.home, event.away);
    });
    state.event_bus.subscribe::<ScoreUpdated, _>(|event| {
        log::debug!(
            "score: {} {} - {} {}",
            event.home, event.home_score, event.away_score, event.away
        );
    });
    state.event_bus.subscribe::<FixtureFinished, _>(|event| {
        log::debug!(
            "final: {} {} - {} {}",
            event.home, event.final_home_score, event.final_away_score, event.away
        );
    });

    // 5. SESSION
    let stdin = io::stdin();
    run_session(
        &state,
        &config.prompt,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;

    Ok(())
}
