// src/repositories/fixture_repository.rs
//
// Live fixture storage. Process lifetime only.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Fixture, FixtureKey};
use crate::error::{AppError, AppResult};

pub trait FixtureRepository: Send + Sync {
    /// Store a fixture unless its key is already taken.
    /// Returns false, leaving the store untouched, when the key is live.
    fn insert_if_absent(&self, fixture: Fixture) -> AppResult<bool>;

    fn get(&self, key: &FixtureKey) -> AppResult<Option<Fixture>>;

    /// Replace the score pair of a live fixture and return the new state
    fn update_score(&self, key: &FixtureKey, home_score: u32, away_score: u32)
        -> AppResult<Option<Fixture>>;

    fn remove(&self, key: &FixtureKey) -> AppResult<Option<Fixture>>;
    fn exists(&self, key: &FixtureKey) -> AppResult<bool>;
    fn list_all(&self) -> AppResult<Vec<Fixture>>;
    fn count(&self) -> AppResult<usize>;
}

/// HashMap behind a single RwLock.
///
/// Each mutating call does its check and its write under one write guard.
#[derive(Default)]
pub struct InMemoryFixtureRepository {
    fixtures: RwLock<HashMap<FixtureKey, Fixture>>,
}

impl InMemoryFixtureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<FixtureKey, Fixture>>> {
        self.fixtures
            .read()
            .map_err(|_| AppError::Other("Fixture store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<FixtureKey, Fixture>>> {
        self.fixtures
            .write()
            .map_err(|_| AppError::Other("Fixture store lock poisoned".to_string()))
    }
}

impl FixtureRepository for InMemoryFixtureRepository {
    fn insert_if_absent(&self, fixture: Fixture) -> AppResult<bool> {
        let mut fixtures = self.write()?;
        let key = fixture.key();
        if fixtures.contains_key(&key) {
            return Ok(false);
        }
        fixtures.insert(key, fixture);
        Ok(true)
    }

    fn get(&self, key: &FixtureKey) -> AppResult<Option<Fixture>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn update_score(
        &self,
        key: &FixtureKey,
        home_score: u32,
        away_score: u32,
    ) -> AppResult<Option<Fixture>> {
        let mut fixtures = self.write()?;
        Ok(fixtures.get_mut(key).map(|fixture| {
            fixture.set_score(home_score, away_score);
            fixture.clone()
        }))
    }

    fn remove(&self, key: &FixtureKey) -> AppResult<Option<Fixture>> {
        Ok(self.write()?.remove(key))
    }

    fn exists(&self, key: &FixtureKey) -> AppResult<bool> {
        Ok(self.read()?.contains_key(key))
    }

    fn list_all(&self) -> AppResult<Vec<Fixture>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}
