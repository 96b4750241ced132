// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod scoreboard_service;


pub use scoreboard_service::{ScoreboardService, UpdateScoreRequest};
