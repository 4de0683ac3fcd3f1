//! Glicko-1 rating system: formulas, cycle tracking, and provisional ratings
//!
//! The rating pipeline is decay (Step 1) followed by a single update (Step 2)
//! over the current cycle's match results; the cycle tracker marks where that
//! window begins.

pub mod cycle;
pub mod glicko;
pub mod provisional;

// Re-export commonly used types
pub use cycle::CycleTracker;
pub use glicko::GlickoCalculator;
pub use provisional::{recompute, RecomputeMode};
