//! Error types for the rating and matchmaking engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating and matchmaking scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingEngineError {
    #[error("Malformed fighter row: {reason}")]
    MalformedFighterRow { reason: String },

    #[error("Invalid cycle advance: requested boundary {requested} is behind current boundary {current}")]
    InvalidCycleAdvance { current: u64, requested: u64 },

    #[error("Matchmaking pool exhausted: {reason}")]
    PoolExhausted { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal engine error: {message}")]
    InternalError { message: String },
}
