//! Inventory capability for actors.
//!
//! Items held here are owned by the inventory: an entity is either in the
//! map's entity set or in exactly one inventory, never both.

use arrayvec::ArrayVec;

use super::{Entity, EntityId};
use crate::config::GameConfig;

type ItemSlots = ArrayVec<Entity, { GameConfig::MAX_INVENTORY_SLOTS }>;

/// Bounded, ordered list of carried items.
///
/// # Invariants
///
/// - `items.len() <= capacity <= GameConfig::MAX_INVENTORY_SLOTS`
/// - Insertion only goes through [`Inventory::try_insert`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    capacity: usize,
    items: ItemSlots,
}

impl Inventory {
    /// Creates an empty inventory. Capacity is clamped to the letter slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Items in selection order (slot `a` first).
    pub fn items(&self) -> &[Entity] {
        &self.items
    }

    /// Returns the item in the given slot, if any.
    pub fn slot(&self, index: usize) -> Option<&Entity> {
        self.items.get(index)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Appends an item, handing it back when the inventory is at capacity.
    pub fn try_insert(&mut self, item: Entity) -> Result<(), Entity> {
        if self.is_full() {
            return Err(item);
        }
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes an item while preserving the order of the remaining slots.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_INVENTORY_CAPACITY)
    }
}
