//! Pickup and drop.
//!
//! An item entity is owned by exactly one place at a time: the map's
//! entity set or an inventory. Both actions move ownership, never copy.

use crate::action::{ActionError, ActionResult, ActionTransition, Capability, Impossible};
use crate::env::GameEnv;
use crate::state::{Entity, EntityId, GameState, Inventory};

fn carrier<'s>(state: &'s GameState, actor: EntityId) -> Result<(&'s Entity, &'s Inventory), ActionError> {
    let entity = state
        .entities
        .get(actor)
        .ok_or(ActionError::EntityNotFound(actor))?;
    let inventory = entity
        .inventory()
        .ok_or(ActionError::missing(actor, Capability::Inventory))?;
    Ok((entity, inventory))
}

fn carrier_inventory_mut(state: &mut GameState, actor: EntityId) -> Result<&mut Inventory, ActionError> {
    state
        .entities
        .get_mut(actor)
        .ok_or(ActionError::EntityNotFound(actor))?
        .inventory_mut()
        .ok_or(ActionError::missing(actor, Capability::Inventory))
}

/// Moves the first item at the actor's cell into its inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn first_item(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let (entity, inventory) = carrier(state, self.actor)?;
        let item = state
            .entities
            .items_at(entity.position)
            .next()
            .ok_or(Impossible::NothingToPickUp)?;
        if inventory.is_full() {
            return Err(Impossible::InventoryFull.into());
        }
        Ok(item.id)
    }
}

impl ActionTransition for PickupAction {
    type Error = ActionError;
    type Result = ActionResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.first_item(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let item_id = self.first_item(state)?;
        let item = state
            .entities
            .remove(item_id)
            .ok_or(ActionError::EntityNotFound(item_id))?;
        let name = item.name.clone();

        if let Err(item) = carrier_inventory_mut(state, self.actor)?.try_insert(item) {
            state.entities.insert(item);
            return Err(Impossible::InventoryFull.into());
        }

        state
            .messages
            .push(format!("You picked up the {name}!"), env.config().palette.text);
        Ok(ActionResult::Pickup { item: item_id })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (_, inventory) = carrier(state, self.actor)?;
        let misplaced = inventory
            .items()
            .iter()
            .find(|item| state.entities.contains(item.id));
        match misplaced {
            Some(item) => Err(ActionError::ItemNotHeld {
                actor: self.actor,
                item: item.id,
            }),
            None => Ok(()),
        }
    }
}

/// Places a held item on the actor's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }

    fn not_held(&self) -> ActionError {
        ActionError::ItemNotHeld {
            actor: self.actor,
            item: self.item,
        }
    }
}

impl ActionTransition for DropAction {
    type Error = ActionError;
    type Result = ActionResult;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (_, inventory) = carrier(state, self.actor)?;
        if inventory.contains(self.item) {
            Ok(())
        } else {
            Err(self.not_held())
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let (entity, _) = carrier(state, self.actor)?;
        let position = entity.position;

        let mut item = carrier_inventory_mut(state, self.actor)?
            .remove(self.item)
            .ok_or_else(|| self.not_held())?;
        item.position = position;
        let text = format!("You dropped the {}.", item.name);
        state.entities.insert(item);

        state.messages.push(text, env.config().palette.text);
        Ok(ActionResult::Drop { item: self.item })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (entity, inventory) = carrier(state, self.actor)?;
        let on_floor = state
            .entities
            .get(self.item)
            .is_some_and(|item| item.position == entity.position);
        if on_floor && !inventory.contains(self.item) {
            Ok(())
        } else {
            Err(ActionError::OccupancyDesync {
                entity: self.item,
                expected: entity.position,
            })
        }
    }
}
