use game_core::{
    Action, ActionError, ActionProvider, ActionResult, BlockCause, Color, Consumable,
    EntitiesState, Entity, EntityId, FovOracle, Fighter, GameConfig, GameEngine, GameEnv,
    GameState, Impossible, Inventory, ItemActionContext, ItemHandle, ItemOracle, MapDimensions,
    MapOracle, Position, StaticTile, TileGrid, TurnOutcome, VisibilityMap,
};

const PLAYER_START: Position = Position::new(5, 5);
const WALL: Position = Position::new(6, 5);
const HEALING_POTION: ItemHandle = ItemHandle(1);

struct World {
    map: TileGrid,
    config: GameConfig,
    state: GameState,
    player: EntityId,
}

impl World {
    /// 10x10 floor with a single wall east of the player.
    fn new(capacity: usize) -> Self {
        let mut map = TileGrid::filled(10, 10, StaticTile::floor());
        map.set_tile(WALL, StaticTile::wall());

        let mut entities = EntitiesState::empty();
        let player = entities.spawn(|id| {
            Entity::actor(id, "Player", PLAYER_START, '@', Color::WHITE, Fighter::new(30, 5, 2))
                .with_inventory(Inventory::new(capacity))
        });
        let visibility = VisibilityMap::new(map.dimensions());

        Self {
            map,
            config: GameConfig::default(),
            state: GameState::new(player, entities, visibility),
            player,
        }
    }

    fn spawn_orc(&mut self, position: Position, fighter: Fighter) -> EntityId {
        self.state.entities.spawn(|id| {
            Entity::actor(id, "Orc", position, 'o', Color::new(63, 127, 63), fighter)
        })
    }

    fn spawn_potion(&mut self, position: Position) -> EntityId {
        self.state.entities.spawn(|id| {
            Entity::item(id, "Healing Potion", position)
                .with_consumable(Consumable::new(HEALING_POTION))
        })
    }

    fn player(&self) -> &Entity {
        self.state.entities.get(self.player).unwrap()
    }

    fn hp(&self, id: EntityId) -> i32 {
        self.state.entities.get(id).unwrap().fighter.unwrap().hp
    }

    fn last_message(&self) -> &str {
        &self.state.messages.last().unwrap().text
    }
}

fn game_env<'a>(config: &'a GameConfig, map: &'a TileGrid) -> GameEnv<'a> {
    GameEnv::new(config).with_map(map)
}

/// Steps every actor one cell toward the player.
struct Chaser;

impl ActionProvider for Chaser {
    fn provide_action(
        &self,
        entity: EntityId,
        state: &GameState,
        _env: &GameEnv<'_>,
    ) -> Option<Action> {
        let own = state.entities.get(entity)?.position;
        let target = state.player_position()?;
        Some(Action::bump(
            entity,
            (target.x - own.x).signum(),
            (target.y - own.y).signum(),
        ))
    }
}

/// Always walks east, into whatever is there.
struct EastWalker;

impl ActionProvider for EastWalker {
    fn provide_action(
        &self,
        entity: EntityId,
        _state: &GameState,
        _env: &GameEnv<'_>,
    ) -> Option<Action> {
        Some(Action::movement(entity, 1, 0))
    }
}

/// Marks every in-bounds cell within a square radius visible.
struct SquareFov;

impl FovOracle for SquareFov {
    fn compute_fov(
        &self,
        map: &dyn MapOracle,
        origin: Position,
        radius: u32,
        visibility: &mut VisibilityMap,
    ) {
        let radius = radius as i32;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let cell = origin.offset(dx, dy);
                if map.contains(cell) {
                    visibility.set_visible(cell, true);
                }
            }
        }
    }
}

struct Potions;

impl ItemOracle for Potions {
    fn activate(
        &self,
        handle: ItemHandle,
        ctx: &mut ItemActionContext<'_, '_>,
    ) -> Result<(), ActionError> {
        assert_eq!(handle, HEALING_POTION);
        let recovered = ctx.actor_fighter_mut()?.heal(4);
        if recovered == 0 {
            return Err(Impossible::consumable("Your health is already full.").into());
        }
        let name = ctx.consume()?.name;
        let color = ctx.palette().health_recovered;
        ctx.message(format!("You consume the {name}, and recover {recovered} HP!"), color);
        Ok(())
    }
}

#[test]
fn movement_into_wall_is_refused_and_logged() {
    let mut world = World::new(26);
    let env = game_env(&world.config, &world.map);
    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::movement(world.player, 1, 0))
        .unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Rejected(Impossible::PathBlocked {
            destination: WALL,
            cause: BlockCause::Terrain,
        })
    );
    assert_eq!(world.player().position, PLAYER_START);
    assert_eq!(world.last_message(), "That way is blocked.");
    assert_eq!(
        world.state.messages.last().unwrap().color,
        world.config.palette.impossible
    );
    assert_eq!(world.state.turn.nonce, 0);
}

#[test]
fn movement_checks_bounds_then_terrain_then_occupants() {
    let mut world = World::new(26);
    world.state.entities.get_mut(world.player).unwrap().position = Position::new(0, 0);
    let env = game_env(&world.config, &world.map);

    let err = Action::movement(world.player, -1, 0)
        .perform(&mut world.state, &env)
        .unwrap_err();
    assert!(matches!(
        err.impossible(),
        Some(Impossible::PathBlocked {
            cause: BlockCause::OutOfBounds,
            ..
        })
    ));

    let orc = world.spawn_orc(Position::new(1, 0), Fighter::new(10, 3, 0));
    let env = game_env(&world.config, &world.map);
    let err = Action::movement(world.player, 1, 0)
        .perform(&mut world.state, &env)
        .unwrap_err();
    assert_eq!(
        err.impossible(),
        Some(&Impossible::PathBlocked {
            destination: Position::new(1, 0),
            cause: BlockCause::Occupied(orc),
        })
    );

    let result = Action::movement(world.player, 0, 1)
        .perform(&mut world.state, &env)
        .unwrap();
    assert_eq!(
        result,
        ActionResult::Move {
            from: Position::new(0, 0),
            to: Position::new(0, 1),
        }
    );
}

#[test]
fn melee_subtracts_power_minus_defense() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(4, 5), Fighter::new(10, 0, 1));
    let env = game_env(&world.config, &world.map);

    let result = Action::melee(world.player, -1, 0)
        .perform(&mut world.state, &env)
        .unwrap();

    match result {
        ActionResult::Attack(outcome) => {
            assert_eq!(outcome.target, orc);
            assert_eq!(outcome.damage, 4);
        }
        other => panic!("expected attack, got {other:?}"),
    }
    assert_eq!(world.hp(orc), 6);
    assert_eq!(world.last_message(), "Player attacks Orc for 4 hit points.");
}

#[test]
fn melee_without_penetration_leaves_hp_untouched() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(5, 4), Fighter::new(10, 0, 9));
    let env = game_env(&world.config, &world.map);

    Action::melee(world.player, 0, -1)
        .perform(&mut world.state, &env)
        .unwrap();

    assert_eq!(world.hp(orc), 10);
    assert_eq!(world.last_message(), "Player attacks Orc but does no damage.");
}

#[test]
fn melee_may_drive_hp_below_zero() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(4, 5), Fighter::new(10, 0, 0));
    world.state.entities.get_mut(orc).unwrap().fighter.as_mut().unwrap().hp = 2;
    let env = game_env(&world.config, &world.map);

    Action::melee(world.player, -1, 0)
        .perform(&mut world.state, &env)
        .unwrap();

    assert_eq!(world.hp(orc), -3);
}

#[test]
fn melee_on_empty_cell_has_nothing_to_attack() {
    let mut world = World::new(26);
    let env = game_env(&world.config, &world.map);
    let err = Action::melee(world.player, 0, 1)
        .perform(&mut world.state, &env)
        .unwrap_err();

    assert_eq!(
        err.impossible(),
        Some(&Impossible::NothingToAttack {
            destination: Position::new(5, 6),
        })
    );
}

#[test]
fn bump_resolves_to_exactly_one_of_melee_or_movement() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(4, 5), Fighter::new(10, 0, 1));
    let env = game_env(&world.config, &world.map);

    let attack = Action::bump(world.player, -1, 0)
        .perform(&mut world.state, &env)
        .unwrap();
    assert!(matches!(attack, ActionResult::Attack(_)));
    assert_eq!(world.player().position, PLAYER_START);
    assert_eq!(world.hp(orc), 6);

    let step = Action::bump(world.player, 0, 1)
        .perform(&mut world.state, &env)
        .unwrap();
    assert!(matches!(step, ActionResult::Move { .. }));
    assert_eq!(world.player().position, Position::new(5, 6));
    assert_eq!(world.hp(orc), 6);
}

#[test]
fn bump_into_wall_reports_blocked_path() {
    let mut world = World::new(26);
    let env = game_env(&world.config, &world.map);
    let err = Action::bump(world.player, 1, 0)
        .perform(&mut world.state, &env)
        .unwrap_err();

    assert_eq!(err.impossible().unwrap().to_string(), "That way is blocked.");
}

#[test]
fn deltas_past_the_coordinate_range_are_refused() {
    let mut world = World::new(26);
    let env = game_env(&world.config, &world.map);

    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::movement(world.player, i32::MAX, 0))
        .unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Rejected(Impossible::PathBlocked {
            destination: Position::new(i32::MAX, 5),
            cause: BlockCause::OutOfBounds,
        })
    );
    assert_eq!(world.player().position, PLAYER_START);
    assert_eq!(world.state.turn.nonce, 0);

    let err = Action::melee(world.player, 0, i32::MAX)
        .perform(&mut world.state, &env)
        .unwrap_err();
    assert!(matches!(
        err.impossible(),
        Some(Impossible::NothingToAttack { .. })
    ));

    let err = Action::bump(world.player, i32::MIN, i32::MAX)
        .perform(&mut world.state, &env)
        .unwrap_err();
    assert!(matches!(
        err.impossible(),
        Some(Impossible::PathBlocked {
            cause: BlockCause::OutOfBounds,
            ..
        })
    ));
    assert_eq!(world.player().position, PLAYER_START);
}

#[test]
fn pickup_with_full_inventory_leaves_item_on_map() {
    let mut world = World::new(1);
    let first = world.spawn_potion(PLAYER_START);
    let second = world.spawn_potion(PLAYER_START);
    let env = game_env(&world.config, &world.map);

    Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();
    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::pickup(world.player))
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Rejected(Impossible::InventoryFull));
    assert!(world.state.entities.contains(second));
    let inventory = world.player().inventory().unwrap();
    assert_eq!(inventory.len(), 1);
    assert!(inventory.contains(first));
    assert_eq!(world.last_message(), "Your inventory is full.");
}

#[test]
fn pickup_takes_first_item_in_insertion_order() {
    let mut world = World::new(26);
    let first = world.spawn_potion(PLAYER_START);
    let second = world.spawn_potion(PLAYER_START);
    let env = game_env(&world.config, &world.map);

    let result = Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();

    assert_eq!(result, ActionResult::Pickup { item: first });
    assert!(world.state.entities.contains(second));
    assert_eq!(world.last_message(), "You picked up the Healing Potion!");
}

#[test]
fn pickup_on_empty_cell_has_nothing_to_pick_up() {
    let mut world = World::new(26);
    world.spawn_potion(Position::new(1, 1));
    let env = game_env(&world.config, &world.map);

    let err = Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap_err();

    assert_eq!(err.impossible(), Some(&Impossible::NothingToPickUp));
}

#[test]
fn pickup_then_drop_restores_membership() {
    let mut world = World::new(26);
    let potion = world.spawn_potion(PLAYER_START);
    let env = game_env(&world.config, &world.map);
    let entities_before = world.state.entities.len();

    Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();
    assert!(!world.state.entities.contains(potion));
    assert_eq!(world.state.entities.len(), entities_before - 1);

    // Drop lands on the actor's current cell, not where the item came from.
    Action::movement(world.player, 0, 1)
        .perform(&mut world.state, &env)
        .unwrap();
    Action::drop_item(world.player, potion)
        .perform(&mut world.state, &env)
        .unwrap();

    assert_eq!(world.state.entities.len(), entities_before);
    assert_eq!(
        world.state.entities.get(potion).unwrap().position,
        Position::new(5, 6)
    );
    assert!(world.player().inventory().unwrap().is_empty());
    assert_eq!(world.last_message(), "You dropped the Healing Potion.");
}

#[test]
fn capacity_is_enforced_after_filling_every_slot() {
    let capacity = 3;
    let mut world = World::new(capacity);
    for _ in 0..=capacity {
        world.spawn_potion(PLAYER_START);
    }
    let env = game_env(&world.config, &world.map);

    for _ in 0..capacity {
        Action::pickup(world.player)
            .perform(&mut world.state, &env)
            .unwrap();
    }
    let held: Vec<EntityId> = world
        .player()
        .inventory()
        .unwrap()
        .items()
        .iter()
        .map(|item| item.id)
        .collect();

    let err = Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap_err();

    assert_eq!(err.impossible(), Some(&Impossible::InventoryFull));
    let after: Vec<EntityId> = world
        .player()
        .inventory()
        .unwrap()
        .items()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(held, after);
}

#[test]
fn dropping_an_item_not_held_is_a_defect() {
    let mut world = World::new(26);
    let potion = world.spawn_potion(Position::new(2, 2));
    let env = game_env(&world.config, &world.map);

    let err = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::drop_item(world.player, potion))
        .unwrap_err();

    assert!(err.impossible().is_none());
    assert!(matches!(
        err.action_error(),
        Some(ActionError::ItemNotHeld { .. })
    ));
}

#[test]
fn enemies_act_after_successful_player_turn() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(5, 7), Fighter::new(10, 3, 0));
    let env = game_env(&world.config, &world.map).with_provider(&Chaser);

    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::wait(world.player))
        .unwrap();
    assert_eq!(outcome, TurnOutcome::Advanced(ActionResult::Wait));
    assert_eq!(
        world.state.entities.get(orc).unwrap().position,
        Position::new(5, 6)
    );

    GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::wait(world.player))
        .unwrap();
    assert_eq!(world.hp(world.player), 29);
    let message = world.state.messages.last().unwrap();
    assert_eq!(message.text, "Orc attacks Player for 1 hit points.");
    assert_eq!(message.color, world.config.palette.enemy_attack);
    assert_eq!(world.state.turn.nonce, 2);
}

#[test]
fn player_attacks_use_player_attack_color() {
    let mut world = World::new(26);
    world.spawn_orc(Position::new(4, 5), Fighter::new(10, 0, 1));
    let env = game_env(&world.config, &world.map);

    GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::bump(world.player, -1, 0))
        .unwrap();

    assert_eq!(
        world.state.messages.last().unwrap().color,
        world.config.palette.player_attack
    );
}

#[test]
fn refused_player_action_freezes_the_world() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(5, 8), Fighter::new(10, 3, 0));
    let env = game_env(&world.config, &world.map).with_provider(&Chaser);

    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::bump(world.player, 1, 0))
        .unwrap();

    assert!(!outcome.advanced());
    assert_eq!(
        world.state.entities.get(orc).unwrap().position,
        Position::new(5, 8)
    );
    assert_eq!(world.state.turn.nonce, 0);
}

#[test]
fn enemy_failures_never_reach_the_player() {
    let mut world = World::new(26);
    // East of this orc is the player: its move is refused every turn.
    let orc = world.spawn_orc(Position::new(4, 5), Fighter::new(10, 3, 0));
    let env = game_env(&world.config, &world.map).with_provider(&EastWalker);

    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::wait(world.player))
        .unwrap();

    assert!(outcome.advanced());
    assert_eq!(
        world.state.entities.get(orc).unwrap().position,
        Position::new(4, 5)
    );
    assert!(world.state.messages.is_empty());
}

#[test]
fn dead_actors_skip_their_turn() {
    let mut world = World::new(26);
    let orc = world.spawn_orc(Position::new(5, 8), Fighter::new(10, 3, 0));
    world.state.entities.get_mut(orc).unwrap().fighter.as_mut().unwrap().hp = 0;
    let env = game_env(&world.config, &world.map).with_provider(&Chaser);

    GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::wait(world.player))
        .unwrap();

    assert_eq!(
        world.state.entities.get(orc).unwrap().position,
        Position::new(5, 8)
    );
}

#[test]
fn escape_terminates_without_advancing() {
    let mut world = World::new(26);
    let env = game_env(&world.config, &world.map);

    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::escape(world.player))
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Terminated);
    assert_eq!(world.state.turn.nonce, 0);
}

#[test]
fn visibility_follows_the_player() {
    let mut world = World::new(26);
    world.config = world.config.clone().with_fov_radius(1);
    let env = game_env(&world.config, &world.map).with_fov(&SquareFov);

    GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::movement(world.player, -1, 0))
        .unwrap();
    GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::movement(world.player, -1, 0))
        .unwrap();

    let visibility = &world.state.visibility;
    assert_eq!(visibility.dimensions(), MapDimensions::new(10, 10));
    assert_eq!(visibility.visible_count(), 9);
    assert!(visibility.is_visible(Position::new(3, 5)));
    assert!(!visibility.is_visible(Position::new(5, 5)));
    assert!(visibility.is_explored(Position::new(5, 5)));
    assert!(!visibility.is_explored(Position::new(6, 5)));
}

#[test]
fn item_use_is_routed_to_the_oracle() {
    let mut world = World::new(26);
    let potion = world.spawn_potion(PLAYER_START);
    world
        .state
        .entities
        .get_mut(world.player)
        .unwrap()
        .fighter
        .as_mut()
        .unwrap()
        .hp = 20;
    let env = game_env(&world.config, &world.map).with_items(&Potions);

    Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();
    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::use_item(world.player, potion, None))
        .unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Advanced(ActionResult::UseItem { item: potion })
    );
    assert_eq!(world.hp(world.player), 24);
    assert!(world.player().inventory().unwrap().is_empty());
    assert_eq!(
        world.last_message(),
        "You consume the Healing Potion, and recover 4 HP!"
    );
}

#[test]
fn item_refusal_keeps_the_item() {
    let mut world = World::new(26);
    let potion = world.spawn_potion(PLAYER_START);
    let env = game_env(&world.config, &world.map).with_items(&Potions);

    Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();
    let outcome = GameEngine::new(&mut world.state)
        .process_player_action(env, &Action::use_item(world.player, potion, None))
        .unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Rejected(Impossible::consumable("Your health is already full."))
    );
    assert!(world.player().inventory().unwrap().contains(potion));
}

#[test]
fn missing_item_oracle_is_a_defect() {
    let mut world = World::new(26);
    let potion = world.spawn_potion(PLAYER_START);
    let env = game_env(&world.config, &world.map);

    Action::pickup(world.player)
        .perform(&mut world.state, &env)
        .unwrap();
    let err = Action::use_item(world.player, potion, None)
        .perform(&mut world.state, &env)
        .unwrap_err();

    assert!(matches!(err.action_error(), Some(ActionError::Oracle(_))));
}
