//! Spatial queries combining static terrain with the live entity set.

use super::{EntitiesState, Entity, Position};
use crate::env::MapOracle;

/// Read-only view answering bounds, terrain, and occupancy questions.
///
/// Out-of-bounds cells are never walkable, so callers may skip the bounds
/// check when they only care about walkability.
pub struct SpatialMap<'a, M>
where
    M: MapOracle + ?Sized,
{
    map: &'a M,
    entities: &'a EntitiesState,
}

impl<'a, M> SpatialMap<'a, M>
where
    M: MapOracle + ?Sized,
{
    pub fn new(map: &'a M, entities: &'a EntitiesState) -> Self {
        Self { map, entities }
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        self.map.contains(position)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.map.is_walkable(position)
    }

    pub fn blocking_entity_at(&self, position: Position) -> Option<&'a Entity> {
        self.entities.blocking_entity_at(position)
    }

    pub fn actor_at(&self, position: Position) -> Option<&'a Entity> {
        self.entities.actor_at(position)
    }
}
