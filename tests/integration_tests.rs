//! Integration tests for the ringside rating engine
//!
//! These tests drive the whole engine the way the surrounding automation
//! would: load a roster, record matches, reload, pick pairings, and close
//! rating cycles, persisting the settled values back into the store.

use rand::rngs::StdRng;
use rand::SeedableRng;
use ringside::config::EngineConfig;
use ringside::matchmaking::ok_matchup;
use ringside::{
    FighterRow, InMemoryRosterStore, MatchRow, MatchWinner, Rating, RatingEngine,
    RatingEngineError, RosterStore,
};
use std::sync::Arc;

fn fighter_row(id: &str, value: f64, deviation: f64) -> FighterRow {
    FighterRow {
        id: id.to_string(),
        name: id.to_uppercase(),
        banned: false,
        excluded_from_rating: false,
        stored_rating_value: value,
        stored_rating_deviation: deviation,
    }
}

fn match_row(sequence_id: u64, a: &str, b: &str, winner: MatchWinner) -> MatchRow {
    MatchRow {
        sequence_id,
        fighter_a_id: a.to_string(),
        fighter_b_id: b.to_string(),
        winner: Some(winner),
        timestamp: ringside::utils::current_timestamp(),
    }
}

/// A store populated with the standard test roster
fn create_test_store() -> Arc<InMemoryRosterStore> {
    let store = Arc::new(InMemoryRosterStore::new());

    let mut mascot = fighter_row("mascot", 1400.0, 80.0);
    mascot.excluded_from_rating = true;
    let mut zetter = fighter_row("zetter", 1550.0, 200.0);
    zetter.banned = true;

    store
        .replace_fighters(vec![
            fighter_row("clairen", 1500.0, 350.0),
            fighter_row("orcane", 1500.0, 350.0),
            fighter_row("ranno", 1600.0, 100.0),
            mascot,
            zetter,
        ])
        .unwrap();

    store
}

/// Write settled ratings back into the store, as the caller's persistence
/// layer would after a cycle close
fn persist_settled(store: &InMemoryRosterStore, close: &ringside::CycleClose) {
    let mut rows = store.fighter_rows().unwrap();
    for row in &mut rows {
        let settled = close
            .ratings
            .iter()
            .find(|s| s.fighter_id == row.id)
            .unwrap();
        row.stored_rating_value = f64::from(settled.rating.value);
        row.stored_rating_deviation = f64::from(settled.rating.deviation);
    }
    store.replace_fighters(rows).unwrap();
}

#[test]
fn test_initial_load_builds_pool() {
    let store = create_test_store();
    let engine = RatingEngine::new(store, EngineConfig::default(), 0).unwrap();

    assert_eq!(engine.roster().len(), 5);
    assert_eq!(engine.current_boundary(), 0);

    // Banned and excluded fighters stay out of the pool
    let pool_ids: Vec<&str> = engine
        .roster()
        .pool()
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(pool_ids, vec!["clairen", "orcane", "ranno"]);
}

#[test]
fn test_choose_pair_draws_valid_matchups() {
    let store = create_test_store();
    let engine = RatingEngine::new(store, EngineConfig::default(), 0).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..25 {
        let (first, second) = engine.choose_pair(&mut rng).unwrap();
        assert_ne!(first.id, second.id);
        assert!(first.eligible() && second.eligible());
        assert!(ok_matchup(&first, &second, 2.0));
    }
}

#[test]
fn test_reload_picks_up_new_matches() {
    let store = create_test_store();
    let mut engine = RatingEngine::new(store.clone(), EngineConfig::default(), 0).unwrap();

    store
        .append_match(match_row(1, "clairen", "orcane", MatchWinner::FighterA))
        .unwrap();

    // Nothing changes until the caller reloads
    assert_eq!(
        engine.roster().fighter("clairen").unwrap().provisional_rating,
        Rating::new(1500, 350)
    );

    engine.reload().unwrap();

    let clairen = engine.roster().fighter("clairen").unwrap();
    let orcane = engine.roster().fighter("orcane").unwrap();
    assert_eq!(clairen.provisional_rating, Rating::new(1662, 290));
    assert_eq!(orcane.provisional_rating, Rating::new(1338, 290));

    // Stored ratings are untouched until cycle close
    assert_eq!(clairen.stored_rating, Rating::new(1500, 350));
    assert_eq!(orcane.stored_rating, Rating::new(1500, 350));

    // Inactive fighters keep their stored ratings as provisional
    assert_eq!(
        engine.roster().fighter("ranno").unwrap().provisional_rating,
        Rating::new(1600, 100)
    );
}

#[test]
fn test_close_cycle_settles_ratings_and_advances_boundary() {
    let store = create_test_store();
    let mut engine = RatingEngine::new(store.clone(), EngineConfig::default(), 0).unwrap();

    store
        .append_match(match_row(1, "clairen", "orcane", MatchWinner::FighterA))
        .unwrap();
    store
        .append_match(match_row(2, "clairen", "orcane", MatchWinner::FighterB))
        .unwrap();

    let close = engine.close_cycle().unwrap();

    assert_eq!(close.record.last_match, 2);
    assert_eq!(engine.current_boundary(), 2);
    assert_eq!(close.ratings.len(), 5);

    let settled = |id: &str| {
        close
            .ratings
            .iter()
            .find(|s| s.fighter_id == id)
            .unwrap()
            .rating
    };

    // Excluded fighters settle at their stored rating, no decay
    assert_eq!(settled("mascot"), Rating::new(1400, 80));
    // Inactive non-excluded fighters settle with decay applied
    assert_eq!(settled("ranno"), Rating::new(1600, 118));
    // Active fighters settle at their updated ratings
    assert_ne!(settled("clairen"), Rating::new(1500, 350));

    // After the caller persists and reloads, the new cycle starts clean:
    // provisional equals stored for everyone
    persist_settled(&store, &close);
    engine.reload().unwrap();
    for fighter in engine.roster().fighters().values() {
        assert_eq!(fighter.provisional_rating, fighter.stored_rating);
    }
}

#[test]
fn test_close_cycle_with_zero_matches() {
    let store = create_test_store();
    let mut engine = RatingEngine::new(store, EngineConfig::default(), 0).unwrap();

    let close = engine.close_cycle().unwrap();

    // No matches: the boundary stays put
    assert_eq!(close.record.last_match, 0);
    assert_eq!(engine.current_boundary(), 0);

    let settled = |id: &str| {
        close
            .ratings
            .iter()
            .find(|s| s.fighter_id == id)
            .unwrap()
            .rating
    };

    // Values never move without results, but deviations of non-excluded
    // fighters decay; saturated deviations stay at the ceiling
    assert_eq!(settled("ranno"), Rating::new(1600, 118));
    assert_eq!(settled("zetter"), Rating::new(1550, 210));
    assert_eq!(settled("clairen"), Rating::new(1500, 350));
    // Excluded fighters never decay
    assert_eq!(settled("mascot"), Rating::new(1400, 80));
}

#[test]
fn test_two_cycle_sequence() {
    let store = create_test_store();
    let mut engine = RatingEngine::new(store.clone(), EngineConfig::default(), 0).unwrap();

    store
        .append_match(match_row(1, "clairen", "orcane", MatchWinner::FighterA))
        .unwrap();
    let first_close = engine.close_cycle().unwrap();
    assert_eq!(first_close.record.last_match, 1);
    persist_settled(&store, &first_close);

    // Second cycle only sees matches past the new boundary
    store
        .append_match(match_row(2, "clairen", "ranno", MatchWinner::FighterB))
        .unwrap();
    engine.reload().unwrap();

    let clairen = engine.roster().fighter("clairen").unwrap();
    assert_eq!(clairen.stored_rating, Rating::new(1662, 290));
    // Lost to ranno this cycle, so the provisional rating drops below stored
    assert!(clairen.provisional_rating.value < clairen.stored_rating.value);

    let second_close = engine.close_cycle().unwrap();
    assert_eq!(second_close.record.last_match, 2);
    assert_eq!(engine.current_boundary(), 2);
}

#[test]
fn test_pool_exhausted_with_one_eligible_fighter() {
    let store = Arc::new(InMemoryRosterStore::new());
    let mut mascot = fighter_row("mascot", 1400.0, 80.0);
    mascot.excluded_from_rating = true;
    store
        .replace_fighters(vec![fighter_row("clairen", 1500.0, 350.0), mascot])
        .unwrap();

    let engine = RatingEngine::new(store, EngineConfig::default(), 0).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let err = engine.choose_pair(&mut rng).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RatingEngineError>(),
        Some(RatingEngineError::PoolExhausted { .. })
    ));
}

#[test]
fn test_malformed_catalog_fails_engine_construction() {
    let store = Arc::new(InMemoryRosterStore::new());
    store
        .replace_fighters(vec![fighter_row("bad", f64::NAN, 350.0)])
        .unwrap();

    let err = RatingEngine::new(store, EngineConfig::default(), 0).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RatingEngineError>(),
        Some(RatingEngineError::MalformedFighterRow { .. })
    ));
}
