//! Rating cycle boundary tracking
//!
//! A rating cycle is the window of matches after the last settled match. The
//! boundary only moves forward, and only through an explicit cycle-close
//! operation driven by the caller.

use crate::error::RatingEngineError;

/// Tracks the sequence id of the last match folded into stored ratings
///
/// Matches with a greater sequence id belong to the current, unsettled cycle.
/// The tracker is a single scalar; transaction discipline around it belongs to
/// the caller's store.
#[derive(Debug, Clone)]
pub struct CycleTracker {
    last_settled_match_id: u64,
}

impl CycleTracker {
    /// Create a tracker at the boundary persisted by the caller
    pub fn new(last_settled_match_id: u64) -> Self {
        Self {
            last_settled_match_id,
        }
    }

    /// The current cycle boundary
    pub fn current_boundary(&self) -> u64 {
        self.last_settled_match_id
    }

    /// Advance the boundary at cycle close
    ///
    /// The boundary is monotonically non-decreasing: advancing to the current
    /// boundary is valid (a cycle with zero matches), moving backward fails
    /// with `InvalidCycleAdvance` and leaves the boundary unchanged.
    pub fn advance(&mut self, new_last_match_id: u64) -> crate::error::Result<()> {
        if new_last_match_id < self.last_settled_match_id {
            return Err(RatingEngineError::InvalidCycleAdvance {
                current: self.last_settled_match_id,
                requested: new_last_match_id,
            }
            .into());
        }

        self.last_settled_match_id = new_last_match_id;
        Ok(())
    }
}
