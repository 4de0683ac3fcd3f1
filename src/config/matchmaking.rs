//! Matchmaking selector configuration

use crate::error::RatingEngineError;
use serde::{Deserialize, Serialize};

/// Parameters of the constrained-random pairing search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchmakingConfig {
    /// Acceptable rating gap between opponents, in units of the larger of the
    /// two provisional deviations. Uncertain fighters match broadly, which
    /// speeds early convergence.
    pub deviation_range: f64,
    /// Maximum number of first-pick draws before the search gives up with
    /// `PoolExhausted` instead of looping forever
    pub max_attempts: u32,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            deviation_range: 2.0,
            max_attempts: 100,
        }
    }
}

impl MatchmakingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.deviation_range.is_finite() || self.deviation_range <= 0.0 {
            return Err(RatingEngineError::ConfigurationError {
                message: "Deviation range must be a positive finite number".to_string(),
            }
            .into());
        }

        if self.max_attempts == 0 {
            return Err(RatingEngineError::ConfigurationError {
                message: "Max attempts must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
