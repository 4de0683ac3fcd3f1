//! Glicko-1 rating formulas
//!
//! Pure rating mathematics: cycle-boundary decay (Step 1), deviation-weighted
//! expected score, and the Step 2 rating update. All results are rounded to
//! integers, the precision the engine stores.

use crate::config::GlickoConfig;
use crate::types::{GameResult, Rating};

// Derived constants shared by every calculation
const Q: f64 = std::f64::consts::LN_10 / 400.0;
const Q_SQUARED: f64 = Q * Q;
const PI_SQUARED: f64 = std::f64::consts::PI * std::f64::consts::PI;

/// Deviation-weighted attenuation factor g(dev)
///
/// Monotonically decreasing in `dev`: more uncertain opponents pull the
/// expected score toward 0.5.
fn attenuation(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * Q_SQUARED * deviation * deviation / PI_SQUARED).sqrt()
}

/// Expected score of `value` against an opponent with `opp_value`/`opp_deviation`
fn expected(value: f64, opp_value: f64, opp_deviation: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(-attenuation(opp_deviation) * (value - opp_value) / 400.0))
}

/// Glicko-1 rating calculator
///
/// Holds the validated system parameters and the decay constant c² derived
/// from them, computed once at construction.
#[derive(Debug, Clone)]
pub struct GlickoCalculator {
    config: GlickoConfig,
    c_squared: f64,
}

impl GlickoCalculator {
    /// Create a new calculator from validated configuration
    pub fn new(config: GlickoConfig) -> crate::error::Result<Self> {
        config.validate()?;

        // c² is sized so that a deviation at the floor returns to the default
        // over `decay_cycles` cycles of total inactivity
        let default_sq = f64::from(config.default_deviation).powi(2);
        let min_sq = f64::from(config.min_deviation).powi(2);
        let c_squared = (default_sq - min_sq) / f64::from(config.decay_cycles);

        Ok(Self { config, c_squared })
    }

    /// Get the rating assigned to fighters with no history
    pub fn default_rating(&self) -> Rating {
        Rating::new(self.config.default_rating, self.config.default_deviation)
    }

    /// Step 1: grow deviation to reflect uncertainty added by a cycle boundary
    ///
    /// The value is unchanged; the deviation saturates at the default and
    /// never exceeds it.
    pub fn decay(&self, rating: Rating) -> Rating {
        let deviation = f64::from(rating.deviation);
        let grown = (deviation * deviation + self.c_squared).sqrt().round() as i32;

        Rating::new(rating.value, grown.min(self.config.default_deviation))
    }

    /// Expected score of `rating` against `opponent`, in (0, 1)
    pub fn expected_score(&self, rating: Rating, opponent: Rating) -> f64 {
        expected(
            f64::from(rating.value),
            f64::from(opponent.value),
            f64::from(opponent.deviation),
        )
    }

    /// Step 2: fold a cycle's results into a rating
    ///
    /// An empty result set returns the rating unchanged. Otherwise the rating
    /// moves by the information-weighted sum of actual-minus-expected scores
    /// and the deviation shrinks accordingly, clamped to the floor. A single
    /// result goes through the same formula as many.
    pub fn update(&self, rating: Rating, results: &[GameResult]) -> Rating {
        if results.is_empty() {
            return rating;
        }

        let value = f64::from(rating.value);
        let mut information = 0.0;
        let mut weighted_surprise = 0.0;
        for result in results {
            let opp_deviation = f64::from(result.opponent.deviation);
            let g = attenuation(opp_deviation);
            let e = expected(value, f64::from(result.opponent.value), opp_deviation);
            information += g * g * e * (1.0 - e);
            weighted_surprise += g * (result.score - e);
        }

        // 1/d² in the Glicko-1 paper
        let inv_d_squared = Q_SQUARED * information;
        let inv_dev_squared = f64::from(rating.deviation).powi(-2);

        let delta = weighted_surprise * Q / (inv_dev_squared + inv_d_squared);
        let new_value = (value + delta).round() as i32;

        let new_deviation = (inv_dev_squared + inv_d_squared).sqrt().recip().round() as i32;

        Rating::new(new_value, new_deviation.max(self.config.min_deviation))
    }
}
