use super::entity::Fixture;
use crate::domain::{DomainError, DomainResult};

/// Validates all Fixture invariants
pub fn validate_fixture(fixture: &Fixture) -> DomainResult<()> {
    validate_distinct_participants(fixture)?;
    Ok(())
}

/// Home and away must be different teams (case-insensitive)
fn validate_distinct_participants(fixture: &Fixture) -> DomainResult<()> {
    if fixture.home() == fixture.away() {
        return Err(DomainError::SameParticipant(fixture.home().to_string()));
    }
    Ok(())
}

/// Scores arrive signed from the command layer and are rejected here if negative.
pub fn validate_scores(home_score: i32, away_score: i32) -> DomainResult<(u32, u32)> {
    match (u32::try_from(home_score), u32::try_from(away_score)) {
        (Ok(home), Ok(away)) => Ok((home, away)),
        _ => Err(DomainError::NegativeScore {
            home_score,
            away_score,
        }),
    }
}

/// Critical Fixture Invariants:
///
/// 1. Home and away are never the same participant
/// 2. Scores are never negative (stored unsigned)
/// 3. At most one live fixture per ordered (home, away) pair
/// 4. start_order is assigned once and never changes
/// 5. Only the registry creates, mutates or removes fixtures
/// 6. A finished fixture is gone; starting the pair again is a new fixture

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_scores_accepted() {
        assert_eq!(validate_scores(0, 0).unwrap(), (0, 0));
        assert_eq!(validate_scores(3, 2).unwrap(), (3, 2));
    }

    #[test]
    fn test_negative_scores_rejected() {
        assert_eq!(
            validate_scores(-1, 2).unwrap_err(),
            DomainError::NegativeScore {
                home_score: -1,
                away_score: 2
            }
        );
        assert!(validate_scores(1, -2).is_err());
        assert!(validate_scores(i32::MIN, i32::MIN).is_err());
    }
}
