//! Idle/demo mode - a simple flap policy that plays the game
//!
//! Aims the bird's bottom edge at a line just above the bottom of the next
//! gap and flaps whenever it sinks below that line while falling.

use super::state::GameState;
use crate::tuning::Tuning;

/// Distance kept between the bird's bottom edge and the gap's bottom
const GAP_MARGIN: f32 = 20.0;
/// Aim offset below the playfield center when no pipe is ahead
const IDLE_OFFSET: f32 = 40.0;

/// Y the bird's bottom edge should stay above
pub fn aim_line(state: &GameState, tuning: &Tuning) -> f32 {
    let bird_left = state.bird.pos.x;
    state
        .pipes
        .iter()
        .find(|pipe| !pipe.passed && pipe.right() >= bird_left)
        .map(|pipe| pipe.gap_bottom() - GAP_MARGIN)
        .unwrap_or(tuning.floor() / 2.0 + IDLE_OFFSET)
}

/// Whether the autopilot would flap this frame
pub fn should_flap(state: &GameState, tuning: &Tuning) -> bool {
    if state.is_over() {
        return false;
    }
    let bird = &state.bird;
    bird.velocity > 0.0 && bird.bounds().bottom() > aim_line(state, tuning)
}
