// src/lib.rs
// LiveScore - Live scoreboard for concurrently running fixtures
//
// Architecture:
// - Domain-centric: identity, invariants and ranking live in the domain
// - Event-driven: the service announces every successful mutation
// - Explicit: every operation returns a Result, nothing panics on bad input
// - Application Layer: text boundary (commands, session, config)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    rank_fixtures,
    summary_order,
    validate_fixture,
    validate_participant_name,
    validate_scores,
    // Catalog
    CountryCatalog,
    DomainError,
    DomainResult,
    // Fixture
    Fixture,
    FixtureKey,
    NameCatalog,
    // Participant
    Participant,
    ACCEPTED_COUNTRIES,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent, EventBus, EventLogEntry, FixtureFinished, FixtureStarted,
    ScoreUpdated,
};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{FixtureRepository, InMemoryFixtureRepository};
pub use services::{ScoreboardService, UpdateScoreRequest};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    run_session, AppConfig, AppState, Command, CommandError, CommandOutcome, CommandParser,
    ErrorResponse, ErrorType,
};
