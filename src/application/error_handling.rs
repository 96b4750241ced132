// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides one consistent error line for the console
// - Never exposes internal implementation details
// - Logs internal errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Malformed command, unknown team, bad score
    Validation,

    /// No live fixture for the pair
    NotFound,

    /// Fixture for the pair is already live
    Conflict,

    /// Anything the user cannot fix by retyping
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => {
                let error_type = match &domain_error {
                    DomainError::FixtureNotFound { .. } => ErrorType::NotFound,
                    DomainError::DuplicateFixture { .. } => ErrorType::Conflict,
                    DomainError::InvalidParticipant(_)
                    | DomainError::SameParticipant(_)
                    | DomainError::NegativeScore { .. }
                    | DomainError::InvalidScoreFormat(_) => ErrorType::Validation,
                };
                Self {
                    error_type,
                    message: domain_error.to_string(),
                }
            }

            AppError::Command(command_error) => Self::validation(command_error.to_string()),

            AppError::Config(message) => Self {
                error_type: ErrorType::Internal,
                message: format!("Configuration problem: {}", message),
            },

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self::internal("Data serialization failed")
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);
                Self::internal("Input/output operation failed")
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::internal("Internal error")
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            error_type: ErrorType::Validation,
            message,
        }
    }

    fn internal(message: &str) -> Self {
        Self {
            error_type: ErrorType::Internal,
            message: message.to_string(),
        }
    }

    /// The line printed on stderr
    pub fn render(&self) -> String {
        format!("Error: {}", self.message)
    }
}
