//! Browser entry points
//!
//! JavaScript owns the canvas and the `requestAnimationFrame` loop; it calls
//! `frame` each tick, forwards pointer/key events, and draws from
//! `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::persistence::LocalStorage;
use crate::platform::{RawInput, StepMode};
use crate::sim::GameEvent;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Flap Gate starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> Result<WebGame, JsValue> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(tuning, seed, LocalStorage, StepMode::Fixed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("New game with seed: {}", seed);
        Ok(WebGame { game })
    }

    /// Advance to `now_ms`; returns a bit set of what happened for audio cues
    /// (1 = scored, 2 = crashed, 4 = new high score)
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        self.game
            .frame(now_ms)
            .iter()
            .fold(0, |bits, event| match event {
                GameEvent::Scored { .. } => bits | 1,
                GameEvent::Collided { .. } => bits | 2,
                GameEvent::NewHighScore { .. } => bits | 4,
                GameEvent::Spawned { .. } => bits,
            })
    }

    pub fn pointer_down(&mut self) {
        self.game.handle(&RawInput::PointerDown);
    }

    /// `code` is `KeyboardEvent.code`
    pub fn key_down(&mut self, code: String) {
        self.game.handle(&RawInput::KeyDown { code });
    }

    /// Call on `visibilitychange`/`blur` so hidden time is not simulated
    pub fn suspend(&mut self) {
        self.game.suspend();
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }
}
