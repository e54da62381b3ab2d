//! Game tuning constants
//!
//! Distances are in playfield pixels, speeds and accelerations are per
//! 60 Hz frame (see [`crate::consts::FRAME_DT`]).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    /// Playfield width
    pub width: f32,
    /// Playfield height (including ground strip)
    pub height: f32,
    /// Height of the ground strip at the bottom
    pub ground_height: f32,

    // === Bird ===
    /// Downward acceleration, px/frame²
    pub gravity: f32,
    /// Velocity set by a flap, px/frame (negative = up)
    pub jump_impulse: f32,
    /// Fixed horizontal position of the bird's left edge
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,

    // === Pipes ===
    /// Leftward pipe speed, px/frame
    pub pipe_speed: f32,
    pub pipe_width: f32,
    /// Vertical clearance between the two segments
    pub gap: f32,
    /// Shortest allowed segment above or below the gap
    pub min_segment: f32,
    /// Time between pipe spawns
    pub spawn_interval_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            ground_height: 50.0,

            gravity: 0.5,
            jump_impulse: -10.0,
            bird_x: 50.0,
            bird_width: 34.0,
            bird_height: 24.0,

            pipe_speed: 2.0,
            pipe_width: 60.0,
            gap: 150.0,
            min_segment: 50.0,
            spawn_interval_ms: 1500.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn floor(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Bird spawn height (top edge)
    #[inline]
    pub fn bird_start_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Allowed heights for a pipe's upper segment
    pub fn gap_range(&self) -> Result<RangeInclusive<f32>, ConfigError> {
        let min = self.min_segment;
        let max = self.height - self.gap - self.min_segment - self.ground_height;
        if max < min {
            return Err(ConfigError::EmptyGapRange { min, max });
        }
        Ok(min..=max)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("bird_x", self.bird_x),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("gap", self.gap),
            ("min_segment", self.min_segment),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("gap", self.gap),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NotPositive { field, value });
        }
        // Zero is allowed for these
        for (field, value) in [
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("min_segment", self.min_segment),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        if self.ground_height >= self.height {
            return Err(ConfigError::GroundTooTall {
                ground: self.ground_height,
                height: self.height,
            });
        }
        let start = self.bird_start_y();
        if start <= 0.0 || start + self.bird_height >= self.floor() {
            return Err(ConfigError::BirdDoesNotFit {
                bird: self.bird_height,
                space: self.floor() - start,
            });
        }

        self.gap_range().map(|_| ())
    }
}
