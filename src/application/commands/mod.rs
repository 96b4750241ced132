// src/application/commands/mod.rs

pub mod handlers;
pub mod parser;

pub use handlers::{execute, CommandOutcome, HELP_LINES};
pub use parser::{Command, CommandError, CommandParser};
