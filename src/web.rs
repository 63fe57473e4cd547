//! Browser driver facade
//!
//! JavaScript owns the canvas, the keyboard listeners and the 50 ms timer.
//! `WebGame` keeps the authoritative state and feeds it through the engine
//! on every call.

use wasm_bindgen::prelude::*;

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::consts::DEFAULT_ASTEROIDS;
use crate::controls::key_action;
use crate::effects::{EffectSink, GameEvent};
use crate::sim::{Engine, GameAction, GameState};

/// Forwards effects to a JS callback `(name: string) => void`
struct JsEffects {
    callback: Option<js_sys::Function>,
}

impl EffectSink for JsEffects {
    fn on_event(&mut self, event: GameEvent) {
        let Some(callback) = &self.callback else {
            return;
        };
        // A throwing sound handler must not take the game down with it
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(event.as_str())) {
            log::warn!("effect callback failed for {}: {:?}", event.as_str(), err);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Already initialized if the module was instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Rock Drift starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    engine: Engine<JsEffects, SystemClock>,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` is an optional partial `EngineConfig` override
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        on_effect: Option<js_sys::Function>,
    ) -> Result<WebGame, JsError> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json)?,
            None => EngineConfig::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let effects = JsEffects {
            callback: on_effect,
        };
        let engine = Engine::new(seed, config, effects, SystemClock)?;
        log::info!("Game created with seed: {}", seed);

        Ok(Self {
            state: GameState::default(),
            engine,
        })
    }

    /// Start a game on a `width` x `height` canvas (also used on resize)
    pub fn initialize(&mut self, width: f32, height: f32, num_asteroids: u32) -> Result<(), JsError> {
        let action = GameAction::initialize(width, height, num_asteroids as usize)?;
        self.apply(action);
        Ok(())
    }

    /// Start over on the current canvas with the default asteroid count
    pub fn restart(&mut self) -> Result<(), JsError> {
        let action = GameAction::initialize(self.state.width, self.state.height, DEFAULT_ASTEROIDS)?;
        self.apply(action);
        Ok(())
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.apply(GameAction::Evolve { dt });
    }

    pub fn key_down(&mut self, key: &str) {
        if let Some(action) = key_action(key, true, &self.state) {
            self.apply(action);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = key_action(key, false, &self.state) {
            self.apply(action);
        }
    }

    pub fn alive(&self) -> bool {
        self.state.alive
    }

    pub fn won(&self) -> bool {
        self.state.won
    }

    /// Timer value for the HUD
    pub fn elapsed_ms(&self) -> f64 {
        self.state.elapsed_ms(self.engine.clock().now_ms())
    }

    /// Current state as JSON for the renderer (vectors are `[x, y]` pairs)
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state)?)
    }
}

impl WebGame {
    fn apply(&mut self, action: GameAction) {
        self.state = self.engine.transition(&self.state, action);
    }
}
