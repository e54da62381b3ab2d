//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here; all of it is
//! serializable so hosts can hand a snapshot across an FFI boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Boundary, Rect};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended, waiting for a reset
    Over,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    Ceiling,
    Ground,
    /// Bird hit a segment of the pipe with this id
    Pipe { id: u32 },
}

impl From<Boundary> for CollisionCause {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Ceiling => CollisionCause::Ceiling,
            Boundary::Ground => CollisionCause::Ground,
        }
    }
}

/// Discrete things that happened during a step, for audio/HUD reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new pipe entered at the right edge
    Spawned { id: u32 },
    /// A pipe was cleared; `score` is the new total
    Scored { score: u32 },
    /// Run ended
    Collided { cause: CollisionCause },
    /// Finished run beat the stored best
    NewHighScore { score: u32 },
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes after spawn
    pub pos: Vec2,
    /// Vertical velocity, px/frame (positive = down)
    pub velocity: f32,
    pub size: Vec2,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y()),
            velocity: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Semi-implicit Euler over `frames` reference frames
    pub fn integrate(&mut self, gravity: f32, frames: f32) {
        self.velocity += gravity * frames;
        self.pos.y += self.velocity * frames;
    }

    /// Nose angle in radians for drawing, derived from velocity
    pub fn tilt(&self) -> f32 {
        (self.velocity * 0.1).clamp(-0.5, 0.5)
    }
}

/// One gated barrier: an upper and a lower segment around a gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge shared by both segments
    pub x: f32,
    pub width: f32,
    /// Height of the upper segment (= y of the gap's top)
    pub gap_top: f32,
    /// Vertical clearance
    pub gap: f32,
    /// Y of the ground line, where the lower segment ends
    pub floor: f32,
    /// Counted toward the score already
    pub passed: bool,
}

impl Pipe {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap
    }

    pub fn upper(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn lower(&self) -> Rect {
        let y = self.gap_bottom();
        Rect::new(self.x, y, self.width, self.floor - y)
    }

    /// Whether either segment overlaps `rect`
    pub fn hits(&self, rect: &Rect) -> bool {
        self.upper().overlaps(rect) || self.lower().overlaps(rect)
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    /// Live pipes, oldest first
    pub pipes: Vec<Pipe>,
    /// Simulated time since the last spawn (or since reset)
    pub since_spawn_ms: f32,
    /// Steps simulated since reset
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            bird: Bird::new(tuning),
            pipes: Vec::new(),
            since_spawn_ms: 0.0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new pipe ID
    pub fn next_pipe_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe() -> Pipe {
        Pipe {
            id: 1,
            x: 200.0,
            width: 60.0,
            gap_top: 120.0,
            gap: 150.0,
            floor: 550.0,
            passed: false,
        }
    }

    #[test]
    fn test_pipe_segments_fill_column() {
        let pipe = pipe();
        let upper = pipe.upper();
        let lower = pipe.lower();
        assert_eq!(upper.top(), 0.0);
        assert_eq!(upper.bottom(), 120.0);
        assert_eq!(lower.top(), 270.0);
        assert_eq!(lower.bottom(), 550.0);
        assert_eq!(upper.size.y + lower.size.y, 550.0 - 150.0);
    }

    #[test]
    fn test_pipe_hits() {
        let pipe = pipe();
        // Inside the gap
        assert!(!pipe.hits(&Rect::new(210.0, 150.0, 34.0, 24.0)));
        // Clipping the upper segment
        assert!(pipe.hits(&Rect::new(210.0, 110.0, 34.0, 24.0)));
        // Clipping the lower segment
        assert!(pipe.hits(&Rect::new(210.0, 260.0, 34.0, 24.0)));
        // Left of the pipe, touching its edge
        assert!(!pipe.hits(&Rect::new(166.0, 110.0, 34.0, 24.0)));
    }

    #[test]
    fn test_bird_integrate() {
        let mut bird = Bird::new(&Tuning::default());
        bird.integrate(0.5, 1.0);
        assert_eq!(bird.velocity, 0.5);
        assert_eq!(bird.pos.y, 300.5);
        bird.integrate(0.5, 1.0);
        assert_eq!(bird.velocity, 1.0);
        assert_eq!(bird.pos.y, 301.5);
    }

    #[test]
    fn test_bird_tilt_clamped() {
        let mut bird = Bird::new(&Tuning::default());
        assert_eq!(bird.tilt(), 0.0);
        bird.velocity = -10.0;
        assert_eq!(bird.tilt(), -0.5);
        bird.velocity = 2.0;
        assert!((bird.tilt() - 0.2).abs() < 1e-6);
        bird.velocity = 30.0;
        assert_eq!(bird.tilt(), 0.5);
    }

    #[test]
    fn test_state_ids_increase() {
        let mut state = GameState::new(&Tuning::default(), 7);
        assert_eq!(state.next_pipe_id(), 1);
        assert_eq!(state.next_pipe_id(), 2);
        assert!(!state.is_over());
    }
}
