//! Engine orchestration: roster, cycle tracking, pairing, and cycle close
//!
//! `RatingEngine` is the single entry point callers drive. It owns no
//! persistence and no I/O: rows come in through the store interface and
//! settled ratings go back out as values for the caller to write. Callers
//! wrapping the engine in a concurrent service must serialize `reload` and
//! `close_cycle`, which have to observe the cycle boundary atomically.

use crate::config::EngineConfig;
use crate::matchmaking::MatchSelector;
use crate::rating::{CycleTracker, RecomputeMode};
use crate::roster::{Roster, RosterStore};
use crate::types::{CycleClose, CycleCloseRecord, Fighter, SettledRating};
use crate::utils::current_timestamp;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

/// Rating and matchmaking engine over a caller-supplied store
pub struct RatingEngine {
    store: Arc<dyn RosterStore>,
    tracker: CycleTracker,
    roster: Roster,
    selector: MatchSelector,
}

impl std::fmt::Debug for RatingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingEngine")
            .field("tracker", &self.tracker)
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl RatingEngine {
    /// Create an engine and perform the initial roster load
    ///
    /// `initial_boundary` is the last settled match id from the caller's
    /// persisted rating-cycle record (0 when no cycle has ever closed).
    pub fn new(
        store: Arc<dyn RosterStore>,
        config: EngineConfig,
        initial_boundary: u64,
    ) -> crate::error::Result<Self> {
        config.validate()?;

        let tracker = CycleTracker::new(initial_boundary);
        let mut roster = Roster::new(store.clone(), config.rating)?;
        roster.reload(tracker.current_boundary(), RecomputeMode::WhenActive)?;

        Ok(Self {
            store,
            tracker,
            roster,
            selector: MatchSelector::new(config.matchmaking)?,
        })
    }

    /// Re-read fighters and the current cycle window from the store
    ///
    /// The only supported way to pick up imported fighters or newly recorded
    /// matches; the engine never polls.
    pub fn reload(&mut self) -> crate::error::Result<()> {
        self.roster
            .reload(self.tracker.current_boundary(), RecomputeMode::WhenActive)
    }

    /// Choose the next fighter pair from the eligible pool
    pub fn choose_pair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> crate::error::Result<(Fighter, Fighter)> {
        let pool = self.roster.pool();
        let (first, second) = self.selector.choose_pair(&pool, rng)?;
        Ok((first.clone(), second.clone()))
    }

    /// Close the current rating cycle
    ///
    /// Recomputes provisional ratings unconditionally (so decay reaches
    /// stored ratings even for fighters without games), returns every
    /// fighter's settled rating plus the cycle record for the caller to
    /// persist, advances the boundary to the newest match, and reloads the
    /// roster for the new cycle.
    pub fn close_cycle(&mut self) -> crate::error::Result<CycleClose> {
        let boundary = self.tracker.current_boundary();
        self.roster.reload(boundary, RecomputeMode::Always)?;

        let ratings: Vec<SettledRating> = self
            .roster
            .fighters()
            .values()
            .map(|fighter| SettledRating {
                fighter_id: fighter.id.clone(),
                rating: fighter.provisional_rating,
            })
            .collect();

        // A cycle without matches closes at the same boundary
        let last_match = self.store.latest_match_id()?.unwrap_or(boundary);
        self.tracker.advance(last_match)?;

        let record = CycleCloseRecord {
            ended_at: current_timestamp(),
            last_match,
        };
        info!(
            fighters = ratings.len(),
            last_match, "rating cycle closed"
        );

        self.roster
            .reload(self.tracker.current_boundary(), RecomputeMode::WhenActive)?;

        Ok(CycleClose { ratings, record })
    }

    /// The last settled match id
    pub fn current_boundary(&self) -> u64 {
        self.tracker.current_boundary()
    }

    /// The loaded roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
