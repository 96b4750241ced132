use crate::domain::{DomainError, DomainResult};

/// Validates a raw participant name and returns its trimmed form.
///
/// Catalog membership is checked separately by `Participant::parse`.
pub fn validate_participant_name(raw: &str) -> DomainResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidParticipant(raw.to_string()));
    }
    Ok(trimmed)
}

/// Invariants that must hold true for Participant domain:
///
/// 1. Name is never empty
/// 2. Name is stored trimmed
/// 3. Name belongs to the injected catalog
/// 4. Identity is the case-folded name
/// 5. Display name and identity come from the same construction step
