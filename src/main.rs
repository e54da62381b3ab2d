//! Flap Gate entry point
//!
//! Native builds run one headless autopilot session and keep the best score
//! in a JSON file. The browser build is driven from JavaScript (see `web`).

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `web::start`, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::Context;

    use flap_gate::consts::FRAME_DT;
    use flap_gate::persistence::FileStore;
    use flap_gate::platform::StepMode;
    use flap_gate::sim::{GameEvent, autopilot};
    use flap_gate::{Game, Tuning};

    /// Give up on an endless run after ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        log::info!("Flap Gate (native) starting...");

        let tuning = match std::env::args().nth(1) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading tuning file {path}"))?;
                Tuning::from_json(&json).with_context(|| format!("loading tuning from {path}"))?
            }
            None => Tuning::default(),
        };

        let save_path =
            std::env::var("FLAP_GATE_SAVE").unwrap_or_else(|_| "flap_gate_scores.json".into());
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let mut game = Game::new(tuning, seed, FileStore::new(&save_path), StepMode::Fixed)
            .context("starting game")?;
        log::info!("Seed {}, best so far {}", seed, game.high_score().best());

        let frame_ms = f64::from(FRAME_DT) * 1000.0;
        let mut now = 0.0;
        game.frame(now);
        for _ in 0..MAX_FRAMES {
            let state = game.engine().state();
            if autopilot::should_flap(state, game.engine().tuning()) {
                game.press();
            }

            now += frame_ms;
            for event in game.frame(now) {
                match event {
                    GameEvent::Scored { score } => log::info!("Score: {}", score),
                    GameEvent::Collided { cause } => log::info!("Crashed: {:?}", cause),
                    GameEvent::NewHighScore { score } => {
                        log::info!("New high score {} saved to {}", score, save_path)
                    }
                    GameEvent::Spawned { .. } => {}
                }
            }
            if game.engine().state().is_over() {
                break;
            }
        }

        let snapshot = game.snapshot();
        println!(
            "Final score: {} | High score: {}",
            snapshot.score, snapshot.high_score
        );
        Ok(())
    }
}
