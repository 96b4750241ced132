// src/application/commands/parser.rs
//
// Text -> Command
//
// RULES:
// - Verb is case-insensitive
// - Argument count is checked before anything else
// - Participant names are resolved through the injected catalog
// - Score text must be an integer; the sign is the registry's business

use std::sync::Arc;

use regex::Regex;
use thiserror::Error;

use crate::domain::{DomainError, DomainResult, NameCatalog, Participant};
use crate::error::AppResult;

/// Quoted names may contain spaces: `start "Costa Rica" Chile`
const TOKEN_PATTERN: &str = r#""([^"]*)"|(\S+)"#;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Invalid command type: {0}")]
    UnknownCommand(String),

    #[error("Invalid number of arguments for {command} command: expected {expected}, got {found}")]
    InvalidArguments {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unterminated quote in command")]
    UnterminatedQuote,
}

/// A fully validated request for one registry operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home: Participant,
        away: Participant,
    },
    Update {
        home: Participant,
        away: Participant,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home: Participant,
        away: Participant,
    },
    Summary,
    Help,
    Exit,
}

pub struct CommandParser {
    catalog: Arc<dyn NameCatalog>,
    token_pattern: Regex,
}

impl CommandParser {
    pub fn new(catalog: Arc<dyn NameCatalog>) -> AppResult<Self> {
        Ok(Self {
            catalog,
            token_pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    pub fn parse(&self, line: &str) -> AppResult<Command> {
        let tokens = self.tokenize(line)?;
        let (verb, args) = tokens.split_first().ok_or(CommandError::EmptyCommand)?;

        let command = match verb.to_lowercase().as_str() {
            "start" => {
                expect_args("START", args, 2)?;
                Command::Start {
                    home: self.participant(&args[0])?,
                    away: self.participant(&args[1])?,
                }
            }
            "update" => {
                expect_args("UPDATE", args, 4)?;
                Command::Update {
                    home: self.participant(&args[0])?,
                    away: self.participant(&args[1])?,
                    home_score: parse_score(&args[2])?,
                    away_score: parse_score(&args[3])?,
                }
            }
            "finish" => {
                expect_args("FINISH", args, 2)?;
                Command::Finish {
                    home: self.participant(&args[0])?,
                    away: self.participant(&args[1])?,
                }
            }
            "summary" => {
                expect_args("SUMMARY", args, 0)?;
                Command::Summary
            }
            "help" => {
                expect_args("HELP", args, 0)?;
                Command::Help
            }
            "exit" => {
                expect_args("EXIT", args, 0)?;
                Command::Exit
            }
            _ => return Err(CommandError::UnknownCommand(verb.clone()).into()),
        };

        Ok(command)
    }

    /// Split a line on whitespace, keeping double-quoted runs together
    pub fn tokenize(&self, line: &str) -> Result<Vec<String>, CommandError> {
        if line.matches('"').count() % 2 != 0 {
            return Err(CommandError::UnterminatedQuote);
        }

        Ok(self
            .token_pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn participant(&self, raw: &str) -> DomainResult<Participant> {
        Participant::parse(raw, self.catalog.as_ref())
    }
}

fn expect_args(command: &'static str, args: &[String], expected: usize) -> Result<(), CommandError> {
    if args.len() != expected {
        return Err(CommandError::InvalidArguments {
            command,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn parse_score(text: &str) -> DomainResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidScoreFormat(text.to_string()))
}
