//! Glicko-1 rating system configuration

use crate::error::RatingEngineError;
use serde::{Deserialize, Serialize};

/// Parameters of the Glicko-1 rating system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlickoConfig {
    /// Rating assigned to fighters with no history
    pub default_rating: i32,
    /// Deviation assigned to fighters with no history; also the saturation
    /// ceiling that decay grows toward
    pub default_deviation: i32,
    /// Floor below which deviation never drops, however much information
    /// accumulates
    pub min_deviation: i32,
    /// Number of fully inactive rating cycles over which a deviation at the
    /// floor grows back to the default
    pub decay_cycles: u32,
}

impl Default for GlickoConfig {
    fn default() -> Self {
        Self {
            default_rating: 1500,
            default_deviation: 350,
            min_deviation: 50,
            decay_cycles: 30,
        }
    }
}

impl GlickoConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.min_deviation <= 0 {
            return Err(RatingEngineError::ConfigurationError {
                message: "Minimum deviation must be positive".to_string(),
            }
            .into());
        }

        if self.default_deviation <= self.min_deviation {
            return Err(RatingEngineError::ConfigurationError {
                message: "Default deviation must exceed the minimum deviation".to_string(),
            }
            .into());
        }

        if self.decay_cycles == 0 {
            return Err(RatingEngineError::ConfigurationError {
                message: "Decay cycles must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
