// src/services/scoreboard_service.rs
//
// The fixture registry: start, update, finish and summarize live fixtures.
//
// Every operation either applies fully or leaves the registry unchanged, and
// emits exactly one event on success and none on failure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info};

use crate::domain::{
    rank_fixtures, validate_scores, DomainError, Fixture, FixtureKey, Participant,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FixtureFinished, FixtureStarted, ScoreUpdated};
use crate::repositories::FixtureRepository;

#[derive(Debug, Clone)]
pub struct UpdateScoreRequest {
    pub home: Participant,
    pub away: Participant,
    pub home_score: i32,
    pub away_score: i32,
}

pub struct ScoreboardService {
    fixture_repo: Arc<dyn FixtureRepository>,
    event_bus: Arc<EventBus>,
    next_start_order: AtomicU64,
}

impl ScoreboardService {
    pub fn new(fixture_repo: Arc<dyn FixtureRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            fixture_repo,
            event_bus,
            next_start_order: AtomicU64::new(1),
        }
    }

    pub fn start_fixture(&self, home: Participant, away: Participant) -> AppResult<Fixture> {
        let start_order = self.next_start_order.fetch_add(1, Ordering::SeqCst);
        let fixture = Fixture::start(home, away, start_order)?;

        if !self.fixture_repo.insert_if_absent(fixture.clone())? {
            return Err(AppError::Domain(DomainError::DuplicateFixture {
                home: fixture.home().to_string(),
                away: fixture.away().to_string(),
            }));
        }

        info!("Fixture started: {} (order {})", fixture, start_order);
        self.event_bus.emit(FixtureStarted::new(&fixture));
        Ok(fixture)
    }

    pub fn update_score(&self, request: UpdateScoreRequest) -> AppResult<Fixture> {
        let (home_score, away_score) = validate_scores(request.home_score, request.away_score)?;
        let key = FixtureKey::new(&request.home, &request.away);

        let fixture = self
            .fixture_repo
            .update_score(&key, home_score, away_score)?
            .ok_or_else(|| not_found(&request.home, &request.away))?;

        info!("Score updated: {}", fixture);
        self.event_bus.emit(ScoreUpdated::new(&fixture));
        Ok(fixture)
    }

    /// Remove a live fixture for good. Starting the pair again yields a new fixture.
    pub fn finish_fixture(&self, home: &Participant, away: &Participant) -> AppResult<Fixture> {
        let fixture = self
            .fixture_repo
            .remove(&FixtureKey::new(home, away))?
            .ok_or_else(|| not_found(home, away))?;

        info!("Fixture finished: {}", fixture);
        self.event_bus.emit(FixtureFinished::new(&fixture));
        Ok(fixture)
    }

    pub fn has_fixture(&self, home: &Participant, away: &Participant) -> AppResult<bool> {
        self.fixture_repo.exists(&FixtureKey::new(home, away))
    }

    pub fn get_fixture(&self, home: &Participant, away: &Participant) -> AppResult<Option<Fixture>> {
        self.fixture_repo.get(&FixtureKey::new(home, away))
    }

    pub fn fixture_count(&self) -> AppResult<usize> {
        self.fixture_repo.count()
    }

    /// Live fixtures, highest total first, most recently started first on ties
    pub fn summarize(&self) -> AppResult<Vec<Fixture>> {
        let fixtures = rank_fixtures(self.fixture_repo.list_all()?);
        debug!("Summary built for {} fixtures", fixtures.len());
        Ok(fixtures)
    }
}

fn not_found(home: &Participant, away: &Participant) -> AppError {
    AppError::Domain(DomainError::FixtureNotFound {
        home: home.to_string(),
        away: away.to_string(),
    })
}
