//! Core error type.
//!
//! Timeline errors signal a defect in whatever generator produced the
//! waypoints; callers propagate them with `?` and never try to repair the
//! timeline.  Coordinate and configuration errors come from user input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("waypoint time {got} precedes the last waypoint time {last}")]
    NonMonotonicTime { last: f64, got: f64 },

    #[error("waypoint time {0} is not finite")]
    NonFiniteTime(f64),

    #[error("position query on an empty timeline")]
    EmptyTimeline,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("coordinate parse error: {0}")]
    Coordinate(String),
}

impl CoreError {
    /// `true` for errors caused by bad user input rather than a generator
    /// defect.
    pub fn is_config(&self) -> bool {
        matches!(self, CoreError::Config(_) | CoreError::Coordinate(_))
    }
}

/// Shorthand result type for `mob-core`.
pub type CoreResult<T> = Result<T, CoreError>;
