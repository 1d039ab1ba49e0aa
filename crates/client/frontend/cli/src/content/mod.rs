//! Demo scenario and the concrete collaborators the terminal client plugs
//! into `game-core`.
mod death;
mod fov;
mod items;
mod map;
mod npc;

pub use death::{ENEMY_DEATH_COLOR, PLAYER_DEATH_COLOR, reap_dead};
pub use fov::LineOfSightFov;
pub use items::{DemoItems, HEALING_POTION, ItemKind, POTION_COLOR};
pub use map::{MAP_HEIGHT, MAP_WIDTH, ROOMS, Room, build_map};
pub use npc::HostileProvider;

use game_core::{
    Color, Consumable, EntitiesState, Entity, Fighter, GameConfig, GameState, Inventory,
    MapOracle, Position, TileGrid, VisibilityMap,
};

const ORC_COLOR: Color = Color::new(63, 127, 63);
const TROLL_COLOR: Color = Color::new(0, 127, 0);

/// Map plus initial state for a new session.
pub struct Scenario {
    pub map: TileGrid,
    pub state: GameState,
}

/// Builds the demo dungeon: player in the first room, monsters and
/// potions spread through the others.
pub fn demo_scenario(config: &GameConfig) -> Scenario {
    let map = build_map();
    let mut entities = EntitiesState::empty();

    let player = entities.spawn(|id| {
        Entity::actor(id, "Player", ROOMS[0].center(), '@', Color::WHITE, Fighter::new(30, 5, 2))
            .with_inventory(Inventory::new(config.inventory_capacity))
    });

    potion(&mut entities, ROOMS[0].center().offset(2, 1));
    for room in &ROOMS[1..] {
        let center = room.center();
        orc(&mut entities, center.offset(-1, 0));
        potion(&mut entities, center.offset(1, 1));
    }
    troll(&mut entities, ROOMS[4].center().offset(2, -1));

    let visibility = VisibilityMap::new(map.dimensions());
    let mut state = GameState::new(player, entities, visibility);
    state.messages.push(
        "Hello and welcome, adventurer, to yet another dungeon!",
        config.palette.welcome,
    );

    Scenario { map, state }
}

fn orc(entities: &mut EntitiesState, position: Position) {
    entities.spawn(|id| Entity::actor(id, "Orc", position, 'o', ORC_COLOR, Fighter::new(10, 3, 0)));
}

fn troll(entities: &mut EntitiesState, position: Position) {
    entities.spawn(|id| {
        Entity::actor(id, "Troll", position, 'T', TROLL_COLOR, Fighter::new(16, 4, 1))
    });
}

fn potion(entities: &mut EntitiesState, position: Position) {
    entities.spawn(|id| {
        Entity::item(id, "Health Potion", position)
            .with_color(POTION_COLOR)
            .with_consumable(Consumable::new(HEALING_POTION))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_starts_on_floor() {
        let scenario = demo_scenario(&GameConfig::default());
        for entity in scenario.state.entities.iter() {
            assert!(
                scenario.map.is_walkable(entity.position),
                "{} spawned inside a wall at {}",
                entity.name,
                entity.position
            );
        }
        assert!(scenario.state.player_is_alive());
        assert_eq!(scenario.state.messages.len(), 1);
    }
}
