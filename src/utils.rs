//! Utility functions for the rating engine

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Calculate the absolute difference between two rating values
pub fn rating_difference(value1: i32, value2: i32) -> i32 {
    (value1 - value2).abs()
}
