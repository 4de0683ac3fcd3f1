//! Provisional rating computation
//!
//! Recomputes every fighter's working rating from its stored rating plus the
//! current cycle's match results: decay first, then a single Glicko-1 update
//! over the cycle window.

use crate::rating::glicko::GlickoCalculator;
use crate::types::{Fighter, FighterId, GameResult, MatchRow, MatchWinner, Rating};
use std::collections::HashMap;
use tracing::debug;

/// When provisional ratings are written back to fighters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeMode {
    /// Only fighters with at least one rated result this cycle get a new
    /// provisional rating; inactive fighters keep their stored rating so no
    /// premature decay is shown
    WhenActive,
    /// Every non-excluded fighter gets a new provisional rating, even with no
    /// results. Used by the cycle-close path so decay lands in stored ratings.
    Always,
}

/// Recompute provisional ratings in place over one cycle's match window
///
/// `matches` must already be restricted to the current cycle (sequence ids
/// past the boundary). Matches without a recorded winner are skipped, as is
/// either side of a match whose opponent is absent from the rateable set —
/// excluded fighters and unknown ids never contribute rating information.
pub fn recompute(
    fighters: &mut HashMap<FighterId, Fighter>,
    matches: &[MatchRow],
    mode: RecomputeMode,
    calculator: &GlickoCalculator,
) {
    // Step 1: decayed stored ratings for every rateable fighter
    let decayed: HashMap<FighterId, Rating> = fighters
        .values()
        .filter(|f| !f.excluded_from_rating)
        .map(|f| (f.id.clone(), calculator.decay(f.stored_rating)))
        .collect();

    // Step 2: gather each fighter's results from the cycle window
    let mut results: HashMap<FighterId, Vec<GameResult>> = HashMap::new();
    for row in matches {
        let winner = match row.winner {
            Some(winner) => winner,
            None => {
                debug!(sequence_id = row.sequence_id, "skipping match without a winner");
                continue;
            }
        };

        let sides = [
            (&row.fighter_a_id, &row.fighter_b_id, MatchWinner::FighterA),
            (&row.fighter_b_id, &row.fighter_a_id, MatchWinner::FighterB),
        ];
        for (fighter_id, opponent_id, winning_side) in sides {
            if !decayed.contains_key(fighter_id) {
                continue;
            }
            let Some(opponent_rating) = decayed.get(opponent_id).copied() else {
                debug!(
                    sequence_id = row.sequence_id,
                    fighter = fighter_id.as_str(),
                    opponent = opponent_id.as_str(),
                    "dropping match against unrateable opponent"
                );
                continue;
            };

            let score = if winner == winning_side { 1.0 } else { 0.0 };
            results.entry(fighter_id.clone()).or_default().push(GameResult {
                opponent: opponent_rating,
                score,
            });
        }
    }

    // Write back: update active fighters (or all rateable ones in Always
    // mode); excluded fighters keep provisional == stored unconditionally
    for fighter in fighters.values_mut() {
        if fighter.excluded_from_rating {
            fighter.provisional_rating = fighter.stored_rating;
            continue;
        }

        let fighter_results = results
            .get(&fighter.id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        if !fighter_results.is_empty() || mode == RecomputeMode::Always {
            let decayed_rating = decayed[&fighter.id];
            fighter.provisional_rating = calculator.update(decayed_rating, fighter_results);
        } else {
            fighter.provisional_rating = fighter.stored_rating;
        }
    }
}
