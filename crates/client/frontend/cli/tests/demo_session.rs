//! Scripted sessions on the demo dungeon, driven through the same input
//! handler the terminal loop uses.

use client_frontend_cli::content::{
    DemoItems, HostileProvider, LineOfSightFov, ROOMS, Scenario, demo_scenario,
};
use client_frontend_core::{FrontendConfig, InputEvent, InputHandler, KeyCode};
use game_core::{
    Action, ActionProvider, EntityId, GameConfig, GameEngine, GameEnv, GameState, Position,
};

fn press(
    handler: &mut InputHandler,
    state: &mut GameState,
    env: GameEnv<'_>,
    code: KeyCode,
) {
    handler
        .handle_event(&InputEvent::from(code), state, env)
        .expect("demo session never hits a defect");
}

fn first_orc(state: &GameState) -> EntityId {
    state
        .entities
        .iter()
        .find(|entity| entity.name == "Orc")
        .map(|entity| entity.id)
        .expect("demo spawns orcs")
}

#[test]
fn player_walks_to_potion_and_drinks_it_when_hurt() {
    let config = FrontendConfig::default();
    let Scenario { map, mut state } = demo_scenario(&config.game);
    let (items, provider, fov) = (DemoItems, HostileProvider, LineOfSightFov);
    let env = GameEnv::new(&config.game)
        .with_map(&map)
        .with_items(&items)
        .with_provider(&provider)
        .with_fov(&fov);
    GameEngine::new(&mut state).update_fov(env);
    assert!(state.visibility.is_visible(ROOMS[0].center()));

    let mut handler = InputHandler::new(&config);
    press(&mut handler, &mut state, env, KeyCode::Char('l'));
    press(&mut handler, &mut state, env, KeyCode::Char('n'));
    assert_eq!(state.player_position(), Some(Position::new(9, 6)));

    press(&mut handler, &mut state, env, KeyCode::Char('g'));
    let held = |state: &GameState| {
        state
            .player_entity()
            .and_then(|player| player.inventory())
            .map(|inventory| inventory.len())
    };
    assert_eq!(held(&state), Some(1));
    assert_eq!(state.turn.nonce, 3);

    press(&mut handler, &mut state, env, KeyCode::Char('i'));
    press(&mut handler, &mut state, env, KeyCode::Char('a'));
    assert_eq!(
        state.messages.last().map(|m| m.text.as_str()),
        Some("Your health is already full.")
    );
    assert_eq!(held(&state), Some(1));
    assert_eq!(state.turn.nonce, 3);

    if let Some(fighter) = state.player_entity_mut().and_then(|p| p.fighter.as_mut()) {
        fighter.hp = 20;
    }
    // A refused item keeps the inventory open.
    press(&mut handler, &mut state, env, KeyCode::Char('a'));

    let player = state.player_entity().expect("player present");
    assert_eq!(player.fighter.map(|f| f.hp), Some(24));
    assert_eq!(held(&state), Some(0));
    assert!(
        state
            .messages
            .iter()
            .any(|m| m.text == "You consume the Health Potion, and recover 4 HP!")
    );
}

#[test]
fn hostile_closes_in_then_strikes_once_seen() {
    let game = GameConfig::default();
    let Scenario { map, mut state } = demo_scenario(&game);
    let (items, provider, fov) = (DemoItems, HostileProvider, LineOfSightFov);
    let env = GameEnv::new(&game)
        .with_map(&map)
        .with_items(&items)
        .with_provider(&provider)
        .with_fov(&fov);
    let orc = first_orc(&state);

    assert_eq!(
        provider.provide_action(orc, &state, &env),
        Some(Action::wait(orc))
    );

    let orc_at = state.entities.get(orc).map(|e| e.position).expect("orc present");
    let player = state.player;
    if let Some(entity) = state.entities.get_mut(player) {
        entity.position = orc_at.offset(-2, 0);
    }
    GameEngine::new(&mut state).update_fov(env);
    assert_eq!(
        provider.provide_action(orc, &state, &env),
        Some(Action::movement(orc, -1, 0))
    );

    if let Some(entity) = state.entities.get_mut(player) {
        entity.position = orc_at.offset(-1, 1);
    }
    GameEngine::new(&mut state).update_fov(env);
    assert_eq!(
        provider.provide_action(orc, &state, &env),
        Some(Action::melee(orc, -1, 1))
    );
}
