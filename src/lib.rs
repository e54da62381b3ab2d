//! Flap Gate - A one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, scoring)
//! - `game`: Host-side session tying the simulation to clock, input and storage
//! - `platform`: Frame timing and input mapping
//! - `persistence`: Key-value stores for the high score
//! - `tuning`: Data-driven game constants

pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ConfigError, StoreError};
pub use game::{Game, Snapshot};
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Host-side constants (gameplay constants live in [`Tuning`])
pub mod consts {
    /// Reference frame duration; physics constants are expressed per frame at 60 Hz
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real frame the clock will account for (tab switches, debugger stalls)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Store key for the best score
    pub const HIGH_SCORE_KEY: &str = "highScore";
}
