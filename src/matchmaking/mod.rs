//! Matchmaking over the eligible fighter pool

pub mod selector;

// Re-export commonly used types
pub use selector::{ok_matchup, MatchSelector};
