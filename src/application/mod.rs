// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain and the scoreboard service
// - It turns raw text into validated commands and outcomes into text
// - It never bypasses the service to touch fixtures

pub mod commands;
pub mod config;
pub mod error_handling;
pub mod session;
pub mod state;

pub use commands::{Command, CommandError, CommandOutcome, CommandParser};
pub use config::{load_catalog_file, AppConfig};
pub use error_handling::{ErrorResponse, ErrorType};
pub use session::run_session;
pub use state::AppState;
