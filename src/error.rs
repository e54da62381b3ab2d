//! Error types
//!
//! Configuration errors are fatal and surface at construction time.
//! Store errors are never fatal; callers log them and carry on in memory.

use thiserror::Error;

/// Invalid game constants
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A field that must be strictly positive is not
    #[error("tuning field `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// A field holds NaN or infinity
    #[error("tuning field `{field}` must be finite")]
    NotFinite { field: &'static str },

    /// Jump impulse must point up (negative y)
    #[error("jump impulse must be negative, got {0}")]
    JumpNotUpward(f32),

    /// Ground is taller than the playfield
    #[error("ground height {ground} does not fit in playfield height {height}")]
    GroundTooTall { ground: f32, height: f32 },

    /// Bird does not fit between ceiling and ground at its start position
    #[error("bird of height {bird} does not fit in the {space}px above the ground")]
    BirdDoesNotFit { bird: f32, space: f32 },

    /// Gap and minimum segments leave no room for a gap position
    #[error("no room for a pipe gap: top segment range [{min}, {max}] is empty")]
    EmptyGapRange { min: f32, max: f32 },

    /// Tuning JSON could not be parsed
    #[error("malformed tuning: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

/// Key-value store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file is not valid JSON
    #[error("store data corrupted: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend is missing (private browsing, storage disabled, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
