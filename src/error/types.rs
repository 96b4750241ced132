// src/error/types.rs
use crate::application::commands::CommandError;
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// The domain failure behind this error, if any
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Other(format!("Pattern error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_display_verbatim() {
        let err = AppError::from(DomainError::FixtureNotFound {
            home: "Spain".to_string(),
            away: "France".to_string(),
        });
        assert_eq!(err.to_string(), "Game not found: Spain vs France");
        assert!(err.domain().is_some());
    }

    #[test]
    fn test_serializes_as_message() {
        let err = AppError::Config("missing catalog".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Configuration error: missing catalog\"");
        assert!(err.domain().is_none());
    }
}
