//! Platform abstraction layer
//!
//! Turns host-side signals into simulation-friendly ones:
//! - Time: display-refresh timestamps into simulation steps
//! - Input: raw pointer/key events into one latched gesture per frame

pub mod clock;
pub mod input;

pub use clock::{FrameClock, FrameSteps, StepMode};
pub use input::{Command, InputLatch, InputMapper, RawInput};
