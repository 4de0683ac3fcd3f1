//! Common types used throughout the rating and matchmaking engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for fighters
pub type FighterId = String;

/// A skill estimate with an associated uncertainty (Glicko-1 style)
///
/// Both fields are integral, matching the precision the engine persists.
/// `deviation` stays within `[min_deviation, default_deviation]` after any
/// decay or update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rating {
    pub value: i32,
    pub deviation: i32,
}

impl Rating {
    pub fn new(value: i32, deviation: i32) -> Self {
        Self { value, deviation }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            value: 1500,
            deviation: 350,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}±{}", self.value, self.deviation)
    }
}

/// Which side of a match won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MatchWinner {
    FighterA,
    FighterB,
}

impl TryFrom<u8> for MatchWinner {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(MatchWinner::FighterA),
            2 => Ok(MatchWinner::FighterB),
            other => Err(format!("winner must be 1 or 2, got {}", other)),
        }
    }
}

impl From<MatchWinner> for u8 {
    fn from(winner: MatchWinner) -> u8 {
        match winner {
            MatchWinner::FighterA => 1,
            MatchWinner::FighterB => 2,
        }
    }
}

/// Raw fighter row as supplied by the caller's store
///
/// Rating fields arrive as loose numbers and are validated during roster load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterRow {
    pub id: String,
    pub name: String,
    pub banned: bool,
    pub excluded_from_rating: bool,
    pub stored_rating_value: f64,
    pub stored_rating_deviation: f64,
}

/// A loaded fighter with its stored and provisional ratings
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub banned: bool,
    /// Flagged as statistically non-representative: never rated, never decayed
    pub excluded_from_rating: bool,
    /// Last settled rating; mutated by the caller only at cycle close
    pub stored_rating: Rating,
    /// Working rating for the current cycle, used for pairing decisions
    pub provisional_rating: Rating,
}

impl Fighter {
    /// Whether this fighter belongs to the matchmaking pool
    pub fn eligible(&self) -> bool {
        !self.banned && !self.excluded_from_rating
    }
}

/// Immutable record of a concluded match, written by the external caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub sequence_id: u64,
    pub fighter_a_id: FighterId,
    pub fighter_b_id: FighterId,
    /// `None` when no winner was recorded (e.g. the game crashed)
    pub winner: Option<MatchWinner>,
    pub timestamp: DateTime<Utc>,
}

/// One rated result from a fighter's perspective: the opponent's rating and
/// the achieved score (1.0 for a win, 0.0 for a loss)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    pub opponent: Rating,
    pub score: f64,
}

/// A fighter's rating as settled at cycle close, for the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledRating {
    pub fighter_id: FighterId,
    pub rating: Rating,
}

/// Cycle-close bookkeeping record, for the caller to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleCloseRecord {
    pub ended_at: DateTime<Utc>,
    pub last_match: u64,
}

/// Complete output of a cycle-close operation
#[derive(Debug, Clone)]
pub struct CycleClose {
    pub ratings: Vec<SettledRating>,
    pub record: CycleCloseRecord,
}
