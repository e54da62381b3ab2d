//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pipes oldest first)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod state;

pub use collision::{Boundary, Rect, out_of_bounds};
pub use engine::SimulationEngine;
pub use state::{Bird, CollisionCause, GameEvent, GamePhase, GameState, Pipe};
