//! In-memory fighter roster and matchmaking pool
//!
//! The roster loads fighter rows from the caller's store, validates them,
//! recomputes provisional ratings over the current cycle window, and derives
//! the pool of fighters eligible for matchmaking.

pub mod store;

pub use store::{InMemoryRosterStore, RosterStore};

use crate::config::GlickoConfig;
use crate::error::RatingEngineError;
use crate::rating::{provisional, GlickoCalculator, RecomputeMode};
use crate::types::{Fighter, FighterId, FighterRow, Rating};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Validate one raw fighter row into a fighter
///
/// Ratings arrive as loose numbers; anything non-finite or non-positive in
/// the deviation is a malformed row, not a value to be clamped.
fn validate_row(row: &FighterRow) -> crate::error::Result<Fighter> {
    if row.id.is_empty() {
        return Err(RatingEngineError::MalformedFighterRow {
            reason: "fighter id is empty".to_string(),
        }
        .into());
    }

    if !row.stored_rating_value.is_finite() {
        return Err(RatingEngineError::MalformedFighterRow {
            reason: format!("fighter {}: rating value is not numeric", row.id),
        }
        .into());
    }

    if !row.stored_rating_deviation.is_finite() || row.stored_rating_deviation <= 0.0 {
        return Err(RatingEngineError::MalformedFighterRow {
            reason: format!(
                "fighter {}: rating deviation must be a positive number, got {}",
                row.id, row.stored_rating_deviation
            ),
        }
        .into());
    }

    let stored_rating = Rating::new(
        row.stored_rating_value.round() as i32,
        row.stored_rating_deviation.round() as i32,
    );

    Ok(Fighter {
        id: row.id.clone(),
        name: row.name.clone(),
        banned: row.banned,
        excluded_from_rating: row.excluded_from_rating,
        stored_rating,
        // Defaults to the stored rating until recomputed
        provisional_rating: stored_rating,
    })
}

/// The loaded fighter set and its derived matchmaking pool
pub struct Roster {
    store: Arc<dyn RosterStore>,
    calculator: GlickoCalculator,
    fighters: HashMap<FighterId, Fighter>,
    pool: Vec<FighterId>,
}

impl Roster {
    /// Create an empty roster over the given store
    pub fn new(store: Arc<dyn RosterStore>, config: GlickoConfig) -> crate::error::Result<Self> {
        Ok(Self {
            store,
            calculator: GlickoCalculator::new(config)?,
            fighters: HashMap::new(),
            pool: Vec::new(),
        })
    }

    /// Load fresh rows from the store and recompute provisional ratings over
    /// the cycle window past `boundary`
    ///
    /// This is the only way the roster picks up catalog or history changes;
    /// the engine never polls. A validation failure leaves the previously
    /// loaded state untouched.
    pub fn reload(&mut self, boundary: u64, mode: RecomputeMode) -> crate::error::Result<()> {
        let rows = self.store.fighter_rows()?;

        let mut fighters = HashMap::with_capacity(rows.len());
        for row in &rows {
            let fighter = validate_row(row)?;
            if fighters.insert(fighter.id.clone(), fighter).is_some() {
                return Err(RatingEngineError::MalformedFighterRow {
                    reason: format!("duplicate fighter id {}", row.id),
                }
                .into());
            }
        }

        let matches = self.store.matches_after(boundary)?;
        provisional::recompute(&mut fighters, &matches, mode, &self.calculator);

        // Sorted by id so a given load always yields the same pool order
        let mut pool: Vec<FighterId> = fighters
            .values()
            .filter(|f| f.eligible())
            .map(|f| f.id.clone())
            .collect();
        pool.sort_unstable();

        debug!(
            fighters = fighters.len(),
            pool = pool.len(),
            window = matches.len(),
            boundary,
            "roster loaded"
        );

        self.fighters = fighters;
        self.pool = pool;
        Ok(())
    }

    /// Look up a fighter by id
    pub fn fighter(&self, id: &str) -> Option<&Fighter> {
        self.fighters.get(id)
    }

    /// All loaded fighters by id
    pub fn fighters(&self) -> &HashMap<FighterId, Fighter> {
        &self.fighters
    }

    /// The matchmaking pool: fighters neither banned nor excluded from rating
    pub fn pool(&self) -> Vec<&Fighter> {
        self.pool.iter().map(|id| &self.fighters[id]).collect()
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}
