//! Roster store interface and in-memory implementation
//!
//! The engine never opens a connection of its own; it reads fighter and match
//! rows through this interface and leaves all persistence to the caller.

use crate::error::RatingEngineError;
use crate::types::{FighterRow, MatchRow};
use std::sync::RwLock;

/// Read-side interface to the caller's fighter and match store
pub trait RosterStore: Send + Sync {
    /// All fighter rows in the catalog
    fn fighter_rows(&self) -> crate::error::Result<Vec<FighterRow>>;

    /// Matches with a sequence id strictly greater than `boundary`
    fn matches_after(&self, boundary: u64) -> crate::error::Result<Vec<MatchRow>>;

    /// Sequence id of the newest match, if any exist
    fn latest_match_id(&self) -> crate::error::Result<Option<u64>>;
}

/// In-memory roster store
///
/// Backs the tests and callers that assemble rows in memory before handing
/// them to the engine. Matches are append-only, mirroring the external
/// relational store's match log.
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    fighters: RwLock<Vec<FighterRow>>,
    matches: RwLock<Vec<MatchRow>>,
}

impl InMemoryRosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fighter catalog (e.g. after an import)
    pub fn replace_fighters(&self, rows: Vec<FighterRow>) -> crate::error::Result<()> {
        let mut fighters =
            self.fighters
                .write()
                .map_err(|_| RatingEngineError::InternalError {
                    message: "Failed to acquire fighters write lock".to_string(),
                })?;

        *fighters = rows;
        Ok(())
    }

    /// Append one concluded match to the log
    pub fn append_match(&self, row: MatchRow) -> crate::error::Result<()> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| RatingEngineError::InternalError {
                message: "Failed to acquire matches write lock".to_string(),
            })?;

        matches.push(row);
        Ok(())
    }
}

impl RosterStore for InMemoryRosterStore {
    fn fighter_rows(&self) -> crate::error::Result<Vec<FighterRow>> {
        let fighters = self
            .fighters
            .read()
            .map_err(|_| RatingEngineError::InternalError {
                message: "Failed to acquire fighters read lock".to_string(),
            })?;

        Ok(fighters.clone())
    }

    fn matches_after(&self, boundary: u64) -> crate::error::Result<Vec<MatchRow>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RatingEngineError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;

        Ok(matches
            .iter()
            .filter(|row| row.sequence_id > boundary)
            .cloned()
            .collect())
    }

    fn latest_match_id(&self) -> crate::error::Result<Option<u64>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RatingEngineError::InternalError {
                message: "Failed to acquire matches read lock".to_string(),
            })?;

        Ok(matches.iter().map(|row| row.sequence_id).max())
    }
}
