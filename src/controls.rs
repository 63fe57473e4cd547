//! Keyboard mapping shared by drivers
//!
//! Keys are DOM `KeyboardEvent.key` names. Releasing a turn key stops all
//! turning, even if the opposite key is still held.

use crate::consts::{THRUST, TURN_RATE};
use crate::sim::{BulletType, GameAction, GameState};

/// Action for a key press (`pressed == true`) or release
pub fn key_action(key: &str, pressed: bool, state: &GameState) -> Option<GameAction> {
    let hold = |value: f32| if pressed { value } else { 0.0 };

    match key {
        "ArrowLeft" => Some(GameAction::SetSpaceshipRotation {
            rotation: hold(-TURN_RATE),
        }),
        "ArrowRight" => Some(GameAction::SetSpaceshipRotation {
            rotation: hold(TURN_RATE),
        }),
        "ArrowUp" => Some(GameAction::SetSpaceshipAcceleration {
            acceleration: hold(THRUST),
        }),
        " " | "Spacebar" if pressed => Some(GameAction::FireBullet {
            bullet_type: BulletType::Normal,
        }),
        "b" | "B" if pressed => Some(GameAction::FireBullet {
            bullet_type: BulletType::Big,
        }),
        "s" | "S" if pressed => Some(GameAction::SetSpecial {
            special: !state.special,
        }),
        _ => None,
    }
}
