//! Configuration for the rating and matchmaking engine
//!
//! This module defines the tunable parameters of the Glicko-1 rating system
//! and the pairing selector, with validation and default values. The engine
//! performs no file or environment loading; callers construct these directly.

pub mod matchmaking;
pub mod rating;

// Re-export commonly used types
pub use matchmaking::MatchmakingConfig;
pub use rating::GlickoConfig;

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rating: GlickoConfig,
    pub matchmaking: MatchmakingConfig,
}

impl EngineConfig {
    /// Validate all configuration sections
    pub fn validate(&self) -> crate::error::Result<()> {
        self.rating.validate()?;
        self.matchmaking.validate()?;
        Ok(())
    }
}
