//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the message
//! log, visibility, and turn bookkeeping. Frontends read this state but
//! mutate it exclusively through actions run by the engine.
mod message;
mod spatial;
pub mod types;
mod visibility;

use crate::env::MapOracle;
pub use message::{Message, MessageLog};
pub use spatial::SpatialMap;
pub use types::{
    Color, Consumable, EntitiesState, Entity, EntityId, Fighter, Inventory, ItemHandle, Position,
    RenderOrder,
};
pub use visibility::VisibilityMap;

/// Turn bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Number of completed turns (successful player actions).
    pub nonce: u64,
}

/// Canonical snapshot of the game world owned by one session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Entity controlled by input. Lives in `entities`.
    pub player: EntityId,
    pub turn: TurnState,
    /// Live entity set of the active map, in insertion order.
    pub entities: EntitiesState,
    pub messages: MessageLog,
    pub visibility: VisibilityMap,
}

impl GameState {
    /// Creates a fresh state. `player` must already be in `entities`.
    pub fn new(player: EntityId, entities: EntitiesState, visibility: VisibilityMap) -> Self {
        debug_assert!(entities.contains(player), "player {player} not in entity set");
        Self {
            player,
            turn: TurnState::default(),
            entities,
            messages: MessageLog::new(),
            visibility,
        }
    }

    /// Spatial query view over the given map and this state's entities.
    pub fn spatial<'a, M>(&'a self, map: &'a M) -> SpatialMap<'a, M>
    where
        M: MapOracle + ?Sized,
    {
        SpatialMap::new(map, &self.entities)
    }

    pub fn player_entity(&self) -> Option<&Entity> {
        self.entities.get(self.player)
    }

    pub fn player_entity_mut(&mut self) -> Option<&mut Entity> {
        self.entities.get_mut(self.player)
    }

    /// Player position, if the player is still in the entity set.
    pub fn player_position(&self) -> Option<Position> {
        self.player_entity().map(|player| player.position)
    }

    pub fn player_is_alive(&self) -> bool {
        self.player_entity().is_some_and(Entity::is_alive)
    }
}
