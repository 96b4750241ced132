use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::invariants::validate_participant_name;
use crate::domain::catalog::{fold_name, NameCatalog};
use crate::domain::{DomainError, DomainResult};

/// A validated team taking part in a fixture.
///
/// Two participants are equal when their trimmed names match ignoring case.
/// The display name keeps the spelling the caller typed.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    /// Trimmed name, original case
    name: String,

    /// Case-folded comparison key
    #[serde(skip)]
    key: String,
}

impl Participant {
    /// Build a participant from raw input.
    /// This is the only way to construct a valid Participant
    pub fn parse(raw: &str, catalog: &dyn NameCatalog) -> DomainResult<Self> {
        let name = validate_participant_name(raw)?;
        if !catalog.is_valid_name(name) {
            return Err(DomainError::InvalidParticipant(name.to_string()));
        }

        Ok(Self {
            key: fold_name(name),
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Participant {}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CountryCatalog, MockNameCatalog};
    use mockall::predicate::function;
    use std::collections::HashSet;

    #[test]
    fn test_parse_trims_and_keeps_case() {
        let catalog = CountryCatalog::builtin();
        let spain = Participant::parse("  sPAin ", &catalog).unwrap();
        assert_eq!(spain.name(), "sPAin");
        assert_eq!(spain.key(), "spain");
        assert_eq!(spain.to_string(), "sPAin");
    }

    #[test]
    fn test_equality_ignores_case() {
        let catalog = CountryCatalog::builtin();
        let a = Participant::parse("Spain", &catalog).unwrap();
        let b = Participant::parse("SPAIN", &catalog).unwrap();
        let c = Participant::parse("France", &catalog).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_name_is_invalid_participant() {
        let catalog = CountryCatalog::builtin();
        let err = Participant::parse("Atlantis", &catalog).unwrap_err();
        assert_eq!(err, DomainError::InvalidParticipant("Atlantis".to_string()));
    }

    #[test]
    fn test_blank_name_never_reaches_catalog() {
        let mut catalog = MockNameCatalog::new();
        catalog.expect_is_valid_name().never();

        let err = Participant::parse("   ", &catalog).unwrap_err();
        assert!(matches!(err, DomainError::InvalidParticipant(_)));
    }

    #[test]
    fn test_catalog_receives_trimmed_name() {
        let mut catalog = MockNameCatalog::new();
        catalog
            .expect_is_valid_name()
            .with(function(|name: &str| name == "Home FC"))
            .times(1)
            .return_const(true);

        let participant = Participant::parse("  Home FC  ", &catalog).unwrap();
        assert_eq!(participant.name(), "Home FC");
    }
}
