//! Effect hooks fired from inside a transition
//!
//! The engine announces what happened (shot fired, asteroid destroyed, ...)
//! and moves on. Sinks return nothing, so a broken audio backend can never
//! reach the game state.

use crate::sim::BulletType;

/// Effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// At least one bullet left the ship
    Fire(BulletType),
    /// A bullet destroyed an asteroid
    Explosion,
    /// An asteroid hit the ship
    GameOver,
    /// Last asteroid cleared
    Victory,
    /// Thrust engaged
    Thrust,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Fire(BulletType::Normal) => "fire",
            GameEvent::Fire(BulletType::Big) => "fire-big",
            GameEvent::Explosion => "explosion",
            GameEvent::GameOver => "game-over",
            GameEvent::Victory => "victory",
            GameEvent::Thrust => "thrust",
        }
    }
}

/// Receiver for effects triggered by the engine
///
/// Implementors only need `on_event`; the named hooks route through it.
pub trait EffectSink {
    fn on_event(&mut self, event: GameEvent);

    fn on_fire(&mut self, bullet_type: BulletType) {
        self.on_event(GameEvent::Fire(bullet_type));
    }

    fn on_explosion(&mut self) {
        self.on_event(GameEvent::Explosion);
    }

    fn on_game_over(&mut self) {
        self.on_event(GameEvent::GameOver);
    }

    fn on_victory(&mut self) {
        self.on_event(GameEvent::Victory);
    }

    fn on_thrust(&mut self) {
        self.on_event(GameEvent::Thrust);
    }
}

/// Discards every effect
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn on_event(&mut self, _event: GameEvent) {}
}

/// Records effects in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events equal to `event`
    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EffectSink for EventLog {
    fn on_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
