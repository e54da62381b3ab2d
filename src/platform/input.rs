//! Input mapping
//!
//! The game has one button. Any press becomes a latched gesture that is
//! resolved at the next frame boundary: restart if the run is over,
//! otherwise flap.

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;

/// Device events the host forwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Mouse button, touch start or pen contact
    PointerDown,
    /// Key press by `KeyboardEvent.code` (e.g. "Space")
    KeyDown { code: String },
}

/// What a gesture means for the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Flap,
    Restart,
}

/// Decides which raw events count as a press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMapper {
    /// Key code that flaps
    pub flap_key: String,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self {
            flap_key: "Space".to_string(),
        }
    }
}

impl InputMapper {
    pub fn is_press(&self, input: &RawInput) -> bool {
        match input {
            RawInput::PointerDown => true,
            RawInput::KeyDown { code } => *code == self.flap_key,
        }
    }
}

/// Holds at most one pending press between frames
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: bool,
}

impl InputLatch {
    pub fn press(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending press, resolved against the current phase
    pub fn take(&mut self, phase: GamePhase) -> Option<Command> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        Some(match phase {
            GamePhase::Over => Command::Restart,
            GamePhase::Running => Command::Flap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper() {
        let mapper = InputMapper::default();
        assert!(mapper.is_press(&RawInput::PointerDown));
        assert!(mapper.is_press(&RawInput::KeyDown {
            code: "Space".into()
        }));
        assert!(!mapper.is_press(&RawInput::KeyDown {
            code: "KeyA".into()
        }));
    }

    #[test]
    fn test_presses_collapse() {
        let mut latch = InputLatch::default();
        assert_eq!(latch.take(GamePhase::Running), None);

        latch.press();
        latch.press();
        latch.press();
        assert!(latch.is_pending());
        assert_eq!(latch.take(GamePhase::Running), Some(Command::Flap));
        assert_eq!(latch.take(GamePhase::Running), None);
    }

    #[test]
    fn test_press_restarts_when_over() {
        let mut latch = InputLatch::default();
        latch.press();
        assert_eq!(latch.take(GamePhase::Over), Some(Command::Restart));
        assert!(!latch.is_pending());
    }
}
