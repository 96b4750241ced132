// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod fixture;
pub mod participant;
pub mod ranking;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog
pub use catalog::{CountryCatalog, NameCatalog, ACCEPTED_COUNTRIES};

// Participant Domain
pub use participant::{validate_participant_name, Participant};

// Fixture Domain
pub use fixture::{validate_fixture, validate_scores, Fixture, FixtureKey};

// Ranking (Derived Data)
pub use ranking::{rank_fixtures, summary_order};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid country name: {0}. Please use one of the predefined country names.")]
    InvalidParticipant(String),

    #[error("Home and away teams cannot be the same: {0}")]
    SameParticipant(String),

    #[error("Game already exists: {home} vs {away}")]
    DuplicateFixture { home: String, away: String },

    #[error("Game not found: {home} vs {away}")]
    FixtureNotFound { home: String, away: String },

    #[error("Scores cannot be negative: {home_score} - {away_score}")]
    NegativeScore { home_score: i32, away_score: i32 },

    #[error("Invalid score format: {0}")]
    InvalidScoreFormat(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
