pub mod entity;
pub mod invariants;

pub use entity::{Fixture, FixtureKey};
pub use invariants::{validate_fixture, validate_scores};
