//! Constrained-random pairing selection
//!
//! Draws a statistically fair fighter pair from the eligible pool: a uniform
//! first pick, a candidate set bounded by provisional-rating distance, and a
//! uniform second pick. Randomness is injected so tests can drive the search
//! deterministically.

use crate::config::MatchmakingConfig;
use crate::error::RatingEngineError;
use crate::types::Fighter;
use rand::Rng;
use tracing::warn;

/// Whether two fighters form a statistically valid matchup
///
/// The acceptable rating gap is proportional to the larger of the two
/// provisional deviations, so uncertain fighters match broadly. Symmetric in
/// its arguments; a fighter never matches itself.
pub fn ok_matchup(a: &Fighter, b: &Fighter, deviation_range: f64) -> bool {
    if a.id == b.id {
        return false;
    }

    let max_gap = deviation_range
        * f64::from(a.provisional_rating.deviation.max(b.provisional_rating.deviation));
    let gap = crate::utils::rating_difference(a.provisional_rating.value, b.provisional_rating.value);

    f64::from(gap) <= max_gap
}

/// Rating-gap-constrained random pair selector
#[derive(Debug, Clone)]
pub struct MatchSelector {
    config: MatchmakingConfig,
}

impl MatchSelector {
    /// Create a selector from validated configuration
    pub fn new(config: MatchmakingConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Draw a valid pair from the pool
    ///
    /// Fails with `PoolExhausted` when the pool has fewer than two members,
    /// or when `max_attempts` first picks in a row found no opponent within
    /// range (the hardened form of the original retry-forever search). Dead
    /// ends are logged and retried; the returned order is random.
    pub fn choose_pair<'a, R: Rng + ?Sized>(
        &self,
        pool: &[&'a Fighter],
        rng: &mut R,
    ) -> crate::error::Result<(&'a Fighter, &'a Fighter)> {
        if pool.len() < 2 {
            return Err(RatingEngineError::PoolExhausted {
                reason: format!("need at least 2 eligible fighters, have {}", pool.len()),
            }
            .into());
        }

        for _ in 0..self.config.max_attempts {
            let first = pool[rng.gen_range(0..pool.len())];

            let candidates: Vec<&Fighter> = pool
                .iter()
                .copied()
                .filter(|other| ok_matchup(first, other, self.config.deviation_range))
                .collect();

            if candidates.is_empty() {
                warn!(
                    fighter = first.name.as_str(),
                    rating = %first.provisional_rating,
                    "no opponent within range, redrawing"
                );
                continue;
            }

            let second = candidates[rng.gen_range(0..candidates.len())];

            // Either fighter may be reported first
            return Ok(if rng.gen_bool(0.5) {
                (first, second)
            } else {
                (second, first)
            });
        }

        Err(RatingEngineError::PoolExhausted {
            reason: format!(
                "no valid pairing found after {} attempts",
                self.config.max_attempts
            ),
        }
        .into())
    }
}
