// src/application/commands/handlers.rs
//
// Command Handlers
//
// RULES:
// - Accept validated Commands
// - Call the scoreboard service
// - Return outcomes the console can render
// - Never contain business logic

use crate::domain::Fixture;
use crate::error::AppResult;
use crate::services::{ScoreboardService, UpdateScoreRequest};

use super::parser::Command;

pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  start <home_team> <away_team>",
    "  update <home_team> <away_team> <home_score> <away_score>",
    "  finish <home_team> <away_team>",
    "  summary",
    "  help",
    "  exit",
    "Team names with spaces go in double quotes, e.g. start \"Costa Rica\" Chile",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Started(Fixture),
    Updated(Fixture),
    Finished(Fixture),
    Summary(Vec<Fixture>),
    Help,
    Exit,
}

impl CommandOutcome {
    /// Console lines for this outcome
    pub fn render(&self) -> Vec<String> {
        match self {
            CommandOutcome::Started(fixture) => vec![format!("Game started: {}", fixture)],
            CommandOutcome::Updated(fixture) => vec![format!("Score updated: {}", fixture)],
            CommandOutcome::Finished(fixture) => vec![format!(
                "Game finished: {} vs {}",
                fixture.home(),
                fixture.away()
            )],
            CommandOutcome::Summary(fixtures) if fixtures.is_empty() => {
                vec!["No games in progress".to_string()]
            }
            CommandOutcome::Summary(fixtures) => std::iter::once("Game Summary:".to_string())
                .chain(fixtures.iter().map(ToString::to_string))
                .collect(),
            CommandOutcome::Help => HELP_LINES.iter().map(|line| line.to_string()).collect(),
            CommandOutcome::Exit => Vec::new(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, CommandOutcome::Exit)
    }
}

/// Run one command against the scoreboard
pub fn execute(service: &ScoreboardService, command: Command) -> AppResult<CommandOutcome> {
    let outcome = match command {
        Command::Start { home, away } => CommandOutcome::Started(service.start_fixture(home, away)?),
        Command::Update {
            home,
            away,
            home_score,
            away_score,
        } => CommandOutcome::Updated(service.update_score(UpdateScoreRequest {
            home,
            away,
            home_score,
            away_score,
        })?),
        Command::Finish { home, away } => {
            CommandOutcome::Finished(service.finish_fixture(&home, &away)?)
        }
        Command::Summary => CommandOutcome::Summary(service.summarize()?),
        Command::Help => CommandOutcome::Help,
        Command::Exit => CommandOutcome::Exit,
    };

    Ok(outcome)
}
