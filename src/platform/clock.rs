//! Frame clock
//!
//! Hosts call `advance` once per display frame with a millisecond timestamp
//! (e.g. the `requestAnimationFrame` argument) and run the returned steps.

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_DT, MAX_FRAME_DT, MAX_SUBSTEPS};

/// How real time maps onto simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepMode {
    /// Whole `FRAME_DT` steps from an accumulator; same result at any refresh rate
    #[default]
    Fixed,
    /// One step per frame covering the real elapsed time
    Variable,
}

/// Steps to simulate for one display frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    pub count: u32,
    /// Duration of each step, seconds
    pub dt: f32,
}

impl FrameSteps {
    pub const NONE: FrameSteps = FrameSteps { count: 0, dt: 0.0 };
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: StepMode,
    last_ms: Option<f64>,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(mode: StepMode) -> Self {
        Self {
            mode,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Forget the last timestamp, e.g. after the tab was hidden
    pub fn restart(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }

    pub fn advance(&mut self, now_ms: f64) -> FrameSteps {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return FrameSteps::NONE;
        };
        let dt = (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT);

        match self.mode {
            StepMode::Variable if dt > 0.0 => FrameSteps { count: 1, dt },
            StepMode::Variable => FrameSteps::NONE,
            StepMode::Fixed => {
                self.accumulator += dt;
                let mut count = 0;
                while self.accumulator >= FRAME_DT && count < MAX_SUBSTEPS {
                    self.accumulator -= FRAME_DT;
                    count += 1;
                }
                FrameSteps {
                    count,
                    dt: FRAME_DT,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_only_records_time() {
        let mut clock = FrameClock::new(StepMode::Fixed);
        assert_eq!(clock.advance(1234.0).count, 0);
    }

    #[test]
    fn test_fixed_steps_at_refresh_rate() {
        let mut clock = FrameClock::new(StepMode::Fixed);
        clock.advance(0.0);
        // 30 Hz display: two simulation steps per frame on average
        let mut total = 0;
        for i in 1..=30 {
            let steps = clock.advance(i as f64 * 1000.0 / 30.0);
            assert_eq!(steps.dt, FRAME_DT);
            total += steps.count;
        }
        assert!((59..=60).contains(&total), "got {total}");
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut clock = FrameClock::new(StepMode::Fixed);
        clock.advance(0.0);
        // Five seconds away from the tab only replays MAX_FRAME_DT worth
        let steps = clock.advance(5000.0);
        assert!((5..=6).contains(&steps.count), "got {}", steps.count);
        assert!(steps.count <= MAX_SUBSTEPS);
        let next = clock.advance(5000.0 + 1000.0 / 60.0);
        assert!(next.count <= 2);
    }

    #[test]
    fn test_variable_single_step() {
        let mut clock = FrameClock::new(StepMode::Variable);
        clock.advance(100.0);
        let steps = clock.advance(150.0);
        assert_eq!(steps.count, 1);
        assert!((steps.dt - 0.05).abs() < 1e-6);

        // Clamped
        let steps = clock.advance(2150.0);
        assert_eq!(steps.dt, MAX_FRAME_DT);

        // Same timestamp twice
        assert_eq!(clock.advance(2150.0), FrameSteps::NONE);
    }

    #[test]
    fn test_backwards_time_yields_nothing() {
        let mut clock = FrameClock::new(StepMode::Fixed);
        clock.advance(500.0);
        assert_eq!(clock.advance(400.0).count, 0);
    }

    #[test]
    fn test_restart_forgets_timestamp() {
        let mut clock = FrameClock::new(StepMode::Variable);
        clock.advance(0.0);
        clock.restart();
        assert_eq!(clock.advance(90_000.0), FrameSteps::NONE);
    }
}
