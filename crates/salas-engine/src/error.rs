//! Error types for engine operations.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid time window: start {start} must be before end {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },

    #[error("need at least two distinct courses to compare, got {0}")]
    InsufficientCourses(usize),

    #[error("suggestion limit must be at least 1")]
    InvalidLimit,
}

pub type Result<T> = std::result::Result<T, EngineError>;
