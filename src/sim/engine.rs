//! Per-frame simulation step
//!
//! The engine owns the whole game state. Hosts drive it with `step`, feed it
//! `jump`/`reset` between steps, and read `state()` to draw.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::out_of_bounds;
use super::state::{CollisionCause, GameEvent, GamePhase, GameState, Pipe};
use crate::consts::FRAME_DT;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Owner of all mutable game state for one session
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    tuning: Tuning,
    /// Validated range for a pipe's upper segment height
    gap_range: RangeInclusive<f32>,
    rng: Pcg32,
    state: GameState,
}

impl SimulationEngine {
    /// Validate tuning and start a running session
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let gap_range = tuning.gap_range()?;
        let state = GameState::new(&tuning, seed);
        Ok(Self {
            tuning,
            gap_range,
            rng: Pcg32::seed_from_u64(seed),
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Physics constants are per reference frame, so a step of exactly
    /// `FRAME_DT` applies them once and longer steps scale them linearly.
    /// Processing stops at the first collision.
    pub fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.is_over() {
            return events;
        }

        let frames = dt / FRAME_DT;
        self.state.time_ticks += 1;

        self.state.bird.integrate(self.tuning.gravity, frames);
        if let Some(boundary) = out_of_bounds(&self.state.bird.bounds(), self.tuning.floor()) {
            self.end_run(boundary.into(), &mut events);
            return events;
        }

        self.state.since_spawn_ms += dt * 1000.0;
        if self.state.since_spawn_ms > self.tuning.spawn_interval_ms {
            let id = self.spawn_pipe();
            self.state.since_spawn_ms = 0.0;
            events.push(GameEvent::Spawned { id });
        }

        let advance = self.tuning.pipe_speed * frames;
        let state = &mut self.state;
        let bird = state.bird.bounds();
        let mut hit = None;
        for pipe in state.pipes.iter_mut() {
            pipe.x -= advance;

            if pipe.hits(&bird) {
                hit = Some(pipe.id);
                break;
            }

            // One point per pair, never per segment
            if !pipe.passed && pipe.right() < bird.left() {
                pipe.passed = true;
                state.score += 1;
                log::debug!("Cleared pipe {}, score {}", pipe.id, state.score);
                events.push(GameEvent::Scored { score: state.score });
            }
        }

        if let Some(id) = hit {
            self.end_run(CollisionCause::Pipe { id }, &mut events);
            return events;
        }

        state.pipes.retain(|pipe| !pipe.off_screen());
        events
    }

    /// Flap: replace the vertical velocity with the jump impulse
    ///
    /// Returns false (and does nothing) once the run is over; callers should
    /// reset instead.
    pub fn jump(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.state.bird.velocity = self.tuning.jump_impulse;
        true
    }

    /// Start a fresh run; the RNG keeps its stream so layouts differ per run
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.tuning, self.state.seed);
        log::info!("Run reset");
    }

    fn spawn_pipe(&mut self) -> u32 {
        let gap_top = self.rng.random_range(self.gap_range.clone());
        let id = self.state.next_pipe_id();
        self.state.pipes.push(Pipe {
            id,
            x: self.tuning.width,
            width: self.tuning.pipe_width,
            gap_top,
            gap: self.tuning.gap,
            floor: self.tuning.floor(),
            passed: false,
        });
        log::debug!("Spawned pipe {} with gap at {:.0}", id, gap_top);
        id
    }

    fn end_run(&mut self, cause: CollisionCause, events: &mut Vec<GameEvent>) {
        self.state.phase = GamePhase::Over;
        log::info!("Game over ({:?}) with score {}", cause, self.state.score);
        events.push(GameEvent::Collided { cause });
    }
}
