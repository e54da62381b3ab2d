//! Game session
//!
//! Glues the pure simulation to the host: frame timing, the one-button
//! input contract, and high-score bookkeeping at game over.

use serde::Serialize;

use crate::error::ConfigError;
use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::platform::{Command, FrameClock, FrameSteps, InputLatch, InputMapper, RawInput, StepMode};
use crate::sim::{Bird, GameEvent, GamePhase, Pipe, SimulationEngine};
use crate::tuning::Tuning;

/// Read-only view handed to renderers each frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub bird: &'a Bird,
    /// Bird rotation in radians
    pub tilt: f32,
    pub pipes: &'a [Pipe],
}

/// One player's session
#[derive(Debug)]
pub struct Game<S: KeyValueStore> {
    engine: SimulationEngine,
    high_score: HighScore<S>,
    clock: FrameClock,
    latch: InputLatch,
    mapper: InputMapper,
}

impl<S: KeyValueStore> Game<S> {
    /// Build a session; the store is read once here
    pub fn new(tuning: Tuning, seed: u64, store: S, mode: StepMode) -> Result<Self, ConfigError> {
        let engine = SimulationEngine::new(tuning, seed)?;
        Ok(Self {
            engine,
            high_score: HighScore::load(store),
            clock: FrameClock::new(mode),
            latch: InputLatch::default(),
            mapper: InputMapper::default(),
        })
    }

    pub fn with_mapper(mut self, mapper: InputMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    /// The one button: flap, or restart once the run is over
    pub fn press(&mut self) {
        self.latch.press();
    }

    /// Forward a device event; ignored unless it maps to a press
    pub fn handle(&mut self, input: &RawInput) {
        if self.mapper.is_press(input) {
            self.press();
        }
    }

    /// Stop counting time until the next frame (tab hidden, window blurred)
    pub fn suspend(&mut self) {
        self.clock.restart();
    }

    /// Run one display frame at host time `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        // Input lands between steps, never inside one
        match self.latch.take(self.engine.state().phase) {
            Some(Command::Restart) => self.engine.reset(),
            Some(Command::Flap) => {
                self.engine.jump();
            }
            None => {}
        }

        let steps = self.clock.advance(now_ms);
        self.run_steps(steps)
    }

    fn run_steps(&mut self, steps: FrameSteps) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..steps.count {
            let step_events = self.engine.step(steps.dt);
            let collided = step_events
                .iter()
                .any(|e| matches!(e, GameEvent::Collided { .. }));
            events.extend(step_events);

            if collided {
                let score = self.engine.state().score;
                if self.high_score.record(score) {
                    events.push(GameEvent::NewHighScore { score });
                }
                break;
            }
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let state = self.engine.state();
        Snapshot {
            phase: state.phase,
            score: state.score,
            high_score: self.high_score.best(),
            bird: &state.bird,
            tilt: state.bird.tilt(),
            pipes: &state.pipes,
        }
    }
}
