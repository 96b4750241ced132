// src/events/mod.rs
//
// Internal Event System - Public API
//
// The type-erased handler stays private to the bus

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{FixtureFinished, FixtureStarted, ScoreUpdated};

pub use bus::{EventBus, EventLogEntry};
