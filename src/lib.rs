//! Ringside - rating and matchmaking engine for automated fighting-game matches
//!
//! This crate maintains Glicko-1 skill estimates for a roster of
//! computer-controlled fighters and selects statistically fair pairings for
//! the next match. Match automation, persistence, and process orchestration
//! live with the caller; the engine computes ratings and pairings from
//! supplied rows and returns values to be persisted.

pub mod config;
pub mod engine;
pub mod error;
pub mod matchmaking;
pub mod rating;
pub mod roster;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingEngineError, Result};
pub use types::*;

// Re-export key components
pub use engine::RatingEngine;
pub use matchmaking::MatchSelector;
pub use rating::{CycleTracker, GlickoCalculator, RecomputeMode};
pub use roster::{InMemoryRosterStore, Roster, RosterStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
