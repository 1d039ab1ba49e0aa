use super::GameEnv;
use crate::action::{Action, ActionError, Capability};
use crate::config::MessagePalette;
use crate::state::{Color, Entity, EntityId, Fighter, GameState, ItemHandle, Position};

/// Item-effect oracle. The core resolves and routes item use; the effects
/// themselves live behind this trait.
pub trait ItemOracle {
    /// Action to queue when `actor` selects `item` from its inventory.
    ///
    /// Defaults to using the item on the actor's own cell. Targeted items
    /// may return `None` and let the frontend gather a target first.
    fn get_action(&self, actor: EntityId, item: &Entity) -> Option<Action> {
        Some(Action::use_item(actor, item.id, None))
    }

    /// Applies the effect of the consumable identified by `handle`.
    fn activate(
        &self,
        handle: ItemHandle,
        ctx: &mut ItemActionContext<'_, '_>,
    ) -> Result<(), ActionError>;
}

/// Everything an item effect may touch while it runs.
pub struct ItemActionContext<'s, 'e> {
    pub actor: EntityId,
    pub item: EntityId,
    /// Resolved target cell; the actor's own cell when none was requested.
    pub target: Position,
    pub state: &'s mut GameState,
    pub env: GameEnv<'e>,
}

impl<'s, 'e> ItemActionContext<'s, 'e> {
    pub fn palette(&self) -> MessagePalette {
        self.env.config().palette
    }

    /// The item being used, still inside the actor's inventory.
    pub fn item_entity(&self) -> Result<&Entity, ActionError> {
        self.state
            .entities
            .get(self.actor)
            .and_then(Entity::inventory)
            .and_then(|inventory| inventory.get(self.item))
            .ok_or(ActionError::ItemNotHeld {
                actor: self.actor,
                item: self.item,
            })
    }

    pub fn actor_entity_mut(&mut self) -> Result<&mut Entity, ActionError> {
        self.state
            .entities
            .get_mut(self.actor)
            .ok_or(ActionError::EntityNotFound(self.actor))
    }

    pub fn actor_fighter_mut(&mut self) -> Result<&mut Fighter, ActionError> {
        let actor = self.actor;
        self.actor_entity_mut()?
            .fighter
            .as_mut()
            .ok_or(ActionError::MissingCapability {
                entity: actor,
                capability: Capability::Fighter,
            })
    }

    /// Removes the item from the actor's inventory and hands it back.
    pub fn consume(&mut self) -> Result<Entity, ActionError> {
        let (actor, item) = (self.actor, self.item);
        self.actor_entity_mut()?
            .inventory_mut()
            .and_then(|inventory| inventory.remove(item))
            .ok_or(ActionError::ItemNotHeld { actor, item })
    }

    pub fn message(&mut self, text: impl Into<String>, color: Color) {
        self.state.messages.push(text, color);
    }
}
