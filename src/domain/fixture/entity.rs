use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::invariants::validate_fixture;
use crate::domain::participant::Participant;
use crate::domain::DomainResult;

/// Identity of a live fixture: the case-folded, ordered (home, away) pair.
///
/// `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixtureKey {
    home: String,
    away: String,
}

impl FixtureKey {
    pub fn new(home: &Participant, away: &Participant) -> Self {
        Self {
            home: home.key().to_string(),
            away: away.key().to_string(),
        }
    }
}

impl fmt::Display for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// An ongoing contest between two distinct participants.
///
/// Fixtures are only built and mutated inside the crate; callers get clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    home: Participant,
    away: Participant,
    home_score: u32,
    away_score: u32,

    /// Creation sequence, unique per registry. Tie-break key for the summary.
    start_order: u64,

    /// Wall clock at creation. Informational only, never used for ordering.
    started_at: DateTime<Utc>,
}

impl Fixture {
    /// Create a fixture at 0 - 0
    pub(crate) fn start(home: Participant, away: Participant, start_order: u64) -> DomainResult<Self> {
        let fixture = Self {
            home,
            away,
            home_score: 0,
            away_score: 0,
            start_order,
            started_at: Utc::now(),
        };
        validate_fixture(&fixture)?;
        Ok(fixture)
    }

    /// Replace the score pair. Identity and creation order are preserved.
    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    pub fn key(&self) -> FixtureKey {
        FixtureKey::new(&self.home, &self.away)
    }

    pub fn home(&self) -> &Participant {
        &self.home
    }

    pub fn away(&self) -> &Participant {
        &self.away
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn start_order(&self) -> u64 {
        self.start_order
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home, self.home_score, self.away_score, self.away
        )
    }
}
