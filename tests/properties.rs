//! Randomized invariant checks over whole play sessions

use proptest::prelude::*;
use rock_drift::consts::SIM_DT;
use rock_drift::{
    BulletType, Engine, EngineConfig, GameAction, GameState, ManualClock, NullEffects,
    SeparationPolicy, WrapPolicy,
};
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
enum Input {
    Turn(f32),
    Thrust(f32),
    Fire(BulletType),
    Tick,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (-2.0f32 * TAU..2.0 * TAU).prop_map(Input::Turn),
        (0.0f32..400.0).prop_map(Input::Thrust),
        prop_oneof![Just(BulletType::Normal), Just(BulletType::Big)].prop_map(Input::Fire),
        Just(Input::Tick),
        Just(Input::Tick),
        Just(Input::Tick),
    ]
}

fn wrap_policy() -> impl Strategy<Value = WrapPolicy> {
    prop_oneof![Just(WrapPolicy::Toroidal), Just(WrapPolicy::Mirror)]
}

fn separation_policy() -> impl Strategy<Value = SeparationPolicy> {
    prop_oneof![Just(SeparationPolicy::Symmetric), Just(SeparationPolicy::Legacy)]
}

fn to_action(input: &Input) -> GameAction {
    match *input {
        Input::Turn(rotation) => GameAction::SetSpaceshipRotation { rotation },
        Input::Thrust(acceleration) => GameAction::SetSpaceshipAcceleration { acceleration },
        Input::Fire(bullet_type) => GameAction::FireBullet { bullet_type },
        Input::Tick => GameAction::Evolve { dt: SIM_DT },
    }
}

fn check_invariants(state: &GameState, config: &EngineConfig) -> Result<(), TestCaseError> {
    let field = state.playfield().expect("initialized");
    let ship = &state.spaceship;

    prop_assert!(field.contains(ship.position), "ship at {:?}", ship.position);
    prop_assert!(
        (0.0..TAU).contains(&ship.angle),
        "ship angle {} not normalized",
        ship.angle
    );
    for asteroid in &state.asteroids {
        prop_assert!(field.contains(asteroid.position), "asteroid at {:?}", asteroid.position);
        prop_assert!(asteroid.radius > 0.0);
    }
    for bullet in &state.bullets {
        prop_assert!(field.contains(bullet.position), "bullet at {:?}", bullet.position);
    }
    prop_assert!(state.active_bullets(BulletType::Normal, config) <= config.normal_bullet.max_active);
    prop_assert!(state.active_bullets(BulletType::Big, config) <= config.big_bullet.max_active);
    Ok(())
}

proptest! {
    #[test]
    fn session_keeps_world_consistent(
        seed in any::<u64>(),
        width in 120.0f32..900.0,
        height in 120.0f32..900.0,
        num_asteroids in 0usize..8,
        wrap in wrap_policy(),
        separation in separation_policy(),
        inputs in prop::collection::vec(input(), 1..300),
    ) {
        let config = EngineConfig { wrap, separation, ..Default::default() };
        let clock = ManualClock::new(0.0);
        let mut engine = Engine::new(seed, config.clone(), NullEffects, clock).unwrap();

        let start = GameAction::initialize(width, height, num_asteroids).unwrap();
        let mut state = engine.transition(&GameState::default(), start);
        check_invariants(&state, &config)?;

        for input in &inputs {
            engine.clock().advance(50.0);
            let previous = state.clone();
            state = engine.transition(&previous, to_action(input));
            check_invariants(&state, &config)?;

            if !previous.alive {
                prop_assert_eq!(&state, &previous);
            }
            if previous.game_end_time.is_some() {
                prop_assert_eq!(state.game_end_time, previous.game_end_time);
            }
        }
    }

    #[test]
    fn same_seed_same_session(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input(), 1..120),
    ) {
        let run = || {
            let mut engine =
                Engine::new(seed, EngineConfig::default(), NullEffects, ManualClock::new(0.0)).unwrap();
            let start = GameAction::initialize(640.0, 480.0, 5).unwrap();
            let mut state = engine.transition(&GameState::default(), start);
            for input in &inputs {
                engine.clock().advance(50.0);
                state = engine.transition(&state, to_action(input));
            }
            state
        };

        prop_assert_eq!(run(), run());
    }
}
