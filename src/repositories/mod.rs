// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data holders
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Every operation is atomic on its own

pub mod fixture_repository;

pub use fixture_repository::{FixtureRepository, InMemoryFixtureRepository};
