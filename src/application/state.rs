// src/application/state.rs

use std::sync::Arc;

use crate::application::commands::{execute, CommandOutcome, CommandParser};
use crate::application::config::AppConfig;
use crate::domain::NameCatalog;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::repositories::{FixtureRepository, InMemoryFixtureRepository};
use crate::services::ScoreboardService;

/// Application state.
/// All fields are Arc-wrapped so the state can be shared freely.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub scoreboard_service: Arc<ScoreboardService>,
    pub command_parser: Arc<CommandParser>,
}

impl AppState {
    /// Wire an empty scoreboard around the given catalog
    pub fn new(catalog: Arc<dyn NameCatalog>) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        let fixture_repo: Arc<dyn FixtureRepository> = Arc::new(InMemoryFixtureRepository::new());
        let scoreboard_service = Arc::new(ScoreboardService::new(fixture_repo, event_bus.clone()));
        let command_parser = Arc::new(CommandParser::new(catalog)?);

        Ok(Self {
            event_bus,
            scoreboard_service,
            command_parser,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(Arc::new(config.build_catalog()?))
    }

    /// Parse and run one line of input
    pub fn handle_line(&self, line: &str) -> AppResult<CommandOutcome> {
        let command = self.command_parser.parse(line)?;
        execute(&self.scoreboard_service, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryCatalog;

    #[test]
    fn test_handle_line_round() {
        let state = AppState::new(Arc::new(CountryCatalog::builtin())).unwrap();

        state.handle_line("start Spain France").unwrap();
        state.handle_line("update spain france 1 0").unwrap();

        let summary = state.handle_line("summary").unwrap();
        assert_eq!(summary.render(), vec!["Game Summary:", "Spain 1 - 0 France"]);
        assert_eq!(state.scoreboard_service.fixture_count().unwrap(), 1);
    }

    #[test]
    fn test_state_usable_after_errors() {
        let state = AppState::new(Arc::new(CountryCatalog::builtin())).unwrap();

        assert!(state.handle_line("start Spain Spain").is_err());
        assert!(state.handle_line("finish Spain France").is_err());
        assert!(state.handle_line("update Spain France x 1").is_err());
        assert!(state.handle_line("start Spain France").is_ok());
        assert_eq!(state.scoreboard_service.fixture_count().unwrap(), 1);
    }
}
