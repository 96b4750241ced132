// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Fixture;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// FIXTURE LIFECYCLE EVENTS
// ============================================================================

/// Emitted when a fixture is started at 0 - 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub home: String,
    pub away: String,
    pub start_order: u64,
}

impl FixtureStarted {
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            home: fixture.home().to_string(),
            away: fixture.away().to_string(),
            start_order: fixture.start_order(),
        }
    }
}

impl DomainEvent for FixtureStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FixtureStarted" }
}

/// Emitted when a live fixture's score pair is replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl ScoreUpdated {
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            home: fixture.home().to_string(),
            away: fixture.away().to_string(),
            home_score: fixture.home_score(),
            away_score: fixture.away_score(),
        }
    }
}

impl DomainEvent for ScoreUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ScoreUpdated" }
}

/// Emitted when a fixture is finished and removed from the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFinished {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub home: String,
    pub away: String,
    pub final_home_score: u32,
    pub final_away_score: u32,
}

impl FixtureFinished {
    pub fn new(fixture: &Fixture) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            home: fixture.home().to_string(),
            away: fixture.away().to_string(),
            final_home_score: fixture.home_score(),
            final_away_score: fixture.away_score(),
        }
    }
}

impl DomainEvent for FixtureFinished {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FixtureFinished" }
}
